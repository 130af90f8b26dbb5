//! Prediction Routes

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use customer_profile::CustomerProfile;
use feature_engine::FeatureVector;
use scoring::{assess_risk, generate_recommendations, ClvBand, LifecycleStage, RiskAssessment};
use session_store::{export_csv, HistorySummary, PredictionRecord};

use crate::error::ApiError;
use crate::AppState;

/// One named feature value, in model input order
#[derive(Debug, Serialize)]
pub struct FeatureValue {
    pub name: &'static str,
    pub value: f64,
}

/// Full evaluation of one submitted profile.
///
/// Every field is computed from the profile submitted with this request; the
/// analysis never rebinds to later form state.
#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    /// Predicted 12-month CLV (currency units)
    pub predicted_value: f64,
    pub band: ClvBand,
    pub band_advisory: &'static str,
    pub features: Vec<FeatureValue>,
    pub risk: RiskAssessment,
    pub risk_summary: &'static str,
    pub lifecycle_stage: LifecycleStage,
    pub lifecycle_label: &'static str,
    pub recommendations: Vec<&'static str>,
    /// Inference latency in microseconds
    pub latency_us: u64,
    /// History length after recording this prediction
    pub history_count: usize,
}

/// Evaluate a profile: validate, derive features, predict, score, record
pub async fn create_prediction(
    State(state): State<Arc<AppState>>,
    Json(profile): Json<CustomerProfile>,
) -> Result<Json<EvaluationResponse>, ApiError> {
    let validation = state.validator.validate(&profile);
    if !validation.valid {
        return Err(ApiError::InvalidInput(validation.errors));
    }

    let features = FeatureVector::derive(&profile);
    let inference = state.model.predict(&features)?;

    let risk = assess_risk(&profile);
    let lifecycle_stage = LifecycleStage::from_tenure(profile.tenure_days);
    let band = ClvBand::from_value(inference.predicted_value);
    let recommendations = generate_recommendations(&profile, &features);

    let record = PredictionRecord {
        timestamp: Utc::now(),
        predicted_value: inference.predicted_value,
        total_spend: profile.total_spend,
        engagement_score: profile.engagement_score,
        recency_days: profile.recency_days,
    };
    let history_count = state.history.read().await.append(record)?;

    Ok(Json(EvaluationResponse {
        predicted_value: inference.predicted_value,
        band,
        band_advisory: band.advisory(),
        features: features
            .pairs()
            .into_iter()
            .map(|(name, value)| FeatureValue { name, value })
            .collect(),
        risk_summary: risk.level.summary(),
        risk,
        lifecycle_stage,
        lifecycle_label: lifecycle_stage.label(),
        recommendations,
        latency_us: inference.latency_us,
        history_count,
    }))
}

/// Query parameters for the history endpoint
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// Maximum number of records, newest first
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    50
}

/// Response for the history endpoint
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub data: Vec<PredictionRecord>,
    pub count: usize,
    pub summary: Option<HistorySummary>,
}

/// Get recent predictions plus summary statistics
pub async fn get_history(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let history = state.history.read().await;
    let data = history.recent(params.limit.min(500))?;
    let summary = history.summary()?;

    Ok(Json(HistoryResponse {
        count: data.len(),
        data,
        summary,
    }))
}

/// Export the full history as CSV
pub async fn export_history(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let records = state.history.read().await.all()?;
    let csv = export_csv(&records)?;

    let filename = format!(
        "clv_predictions_{}.csv",
        Utc::now().format("%Y%m%d_%H%M%S")
    );
    let headers = [
        (header::CONTENT_TYPE, "text/csv".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];

    Ok((headers, csv))
}
