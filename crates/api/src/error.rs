//! API Error Mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use customer_profile::ValidationError;
use inference_engine::InferenceError;
use serde::Serialize;
use session_store::StoreError;
use thiserror::Error;
use tracing::error;

/// Errors surfaced by request handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("input validation failed")]
    InvalidInput(Vec<ValidationError>),
    #[error(transparent)]
    Inference(#[from] InferenceError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// JSON error body
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InvalidInput(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "input validation failed".to_string(),
                    details: errors.iter().map(|e| e.to_string()).collect(),
                },
            ),
            ApiError::Inference(e) => {
                error!("inference failure: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: e.to_string(),
                        details: Vec::new(),
                    },
                )
            }
            ApiError::Store(e) => {
                error!("session store failure: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: e.to_string(),
                        details: Vec::new(),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
