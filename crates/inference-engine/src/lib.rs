//! CLV Inference Engine
//!
//! Loads the pre-trained regression model artifact and its selected-feature
//! list, verifies feature ordering against the feature engine, and serves
//! synchronous predictions.

mod engine;
mod model;

pub use engine::{ClvModel, InferenceResult};
pub use model::{Node, RegressionModel, Tree};

use thiserror::Error;

/// Errors while loading or validating the model artifact. All of these are
/// fatal at startup.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model artifact load failed: {0}")]
    ArtifactLoad(String),
    #[error("Feature list load failed: {0}")]
    FeatureListLoad(String),
    #[error("Feature list mismatch: model expects {actual:?}, engine derives {expected:?}")]
    FeatureMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },
    #[error("Malformed model: {0}")]
    Malformed(String),
}

/// Errors during inference
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Invalid input shape: expected {expected}, got {actual}")]
    InvalidInputShape { expected: usize, actual: usize },
    #[error("Model produced a non-finite prediction")]
    NonFinitePrediction,
}
