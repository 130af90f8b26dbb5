//! Inference Service Object

use crate::model::{Node, RegressionModel, Tree};
use crate::{InferenceError, ModelError};
use feature_engine::{FeatureVector, FEATURE_NAMES};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Result of one inference call
#[derive(Debug, Clone)]
pub struct InferenceResult {
    /// Predicted 12-month CLV (currency units)
    pub predicted_value: f64,
    /// Inference latency in microseconds
    pub latency_us: u64,
}

/// The pre-trained CLV model, built once at startup and shared read-only for
/// the process lifetime.
#[derive(Debug)]
pub struct ClvModel {
    model: RegressionModel,
    feature_names: Vec<String>,
}

impl ClvModel {
    /// Load the model artifact and selected-feature list from disk.
    ///
    /// The feature list must match [`FEATURE_NAMES`] exactly, names and order
    /// both. Any failure here is a configuration error and aborts startup.
    pub fn load(model_path: &Path, features_path: &Path) -> Result<Self, ModelError> {
        info!(model = %model_path.display(), features = %features_path.display(), "loading CLV model");

        let raw = fs::read_to_string(model_path)
            .map_err(|e| ModelError::ArtifactLoad(format!("{}: {e}", model_path.display())))?;
        let model: RegressionModel =
            serde_json::from_str(&raw).map_err(|e| ModelError::ArtifactLoad(e.to_string()))?;

        let raw = fs::read_to_string(features_path)
            .map_err(|e| ModelError::FeatureListLoad(format!("{}: {e}", features_path.display())))?;
        let feature_names: Vec<String> =
            serde_json::from_str(&raw).map_err(|e| ModelError::FeatureListLoad(e.to_string()))?;

        Self::from_parts(model, feature_names)
    }

    /// Build the service object from in-memory parts, verifying alignment
    pub fn from_parts(
        model: RegressionModel,
        feature_names: Vec<String>,
    ) -> Result<Self, ModelError> {
        if feature_names != FEATURE_NAMES {
            return Err(ModelError::FeatureMismatch {
                expected: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
                actual: feature_names,
            });
        }
        model.validate(feature_names.len())?;

        info!(trees = model.trees.len(), dimension = feature_names.len(), "CLV model ready");
        Ok(Self {
            model,
            feature_names,
        })
    }

    /// Create a small fixed model for tests
    pub fn mock() -> Self {
        let model = RegressionModel {
            base_score: 1500.0,
            trees: vec![
                // SpendPerOrder split
                Tree {
                    nodes: vec![
                        Node::Split {
                            feature: 3,
                            threshold: 200.0,
                            left: 1,
                            right: 2,
                        },
                        Node::Leaf { value: -400.0 },
                        Node::Leaf { value: 600.0 },
                    ],
                },
                // EngagementScore split
                Tree {
                    nodes: vec![
                        Node::Split {
                            feature: 5,
                            threshold: 0.4,
                            left: 1,
                            right: 2,
                        },
                        Node::Leaf { value: -250.0 },
                        Node::Leaf { value: 250.0 },
                    ],
                },
                // TotalSpend split
                Tree {
                    nodes: vec![
                        Node::Split {
                            feature: 0,
                            threshold: 2000.0,
                            left: 1,
                            right: 2,
                        },
                        Node::Leaf { value: -150.0 },
                        Node::Leaf { value: 350.0 },
                    ],
                },
            ],
        };
        let feature_names = FEATURE_NAMES.iter().map(|s| s.to_string()).collect();
        Self {
            model,
            feature_names,
        }
    }

    /// Run inference on a derived feature vector
    pub fn predict(&self, features: &FeatureVector) -> Result<InferenceResult, InferenceError> {
        self.predict_slice(&features.values)
    }

    /// Run inference on a raw feature slice in [`FEATURE_NAMES`] order
    pub fn predict_slice(&self, values: &[f64]) -> Result<InferenceResult, InferenceError> {
        let start = std::time::Instant::now();

        if values.len() != self.feature_names.len() {
            return Err(InferenceError::InvalidInputShape {
                expected: self.feature_names.len(),
                actual: values.len(),
            });
        }

        let predicted_value = self.model.predict(values);
        if !predicted_value.is_finite() {
            return Err(InferenceError::NonFinitePrediction);
        }

        let latency_us = start.elapsed().as_micros() as u64;
        debug!(predicted_value, latency_us, "inference complete");

        Ok(InferenceResult {
            predicted_value,
            latency_us,
        })
    }

    /// Ordered feature names the model was trained on
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Input dimension of the model
    pub fn feature_dimension(&self) -> usize {
        self.feature_names.len()
    }

    /// Number of trees in the ensemble
    pub fn tree_count(&self) -> usize {
        self.model.trees.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use customer_profile::CustomerProfile;

    #[test]
    fn test_mock_prediction() {
        let engine = ClvModel::mock();
        let features = FeatureVector::derive(&CustomerProfile::default());

        // SpendPerOrder 100 -> -400, engagement 0.5 -> +250, spend 1000 -> -150
        let result = engine.predict(&features).unwrap();
        assert_eq!(result.predicted_value, 1200.0);
    }

    #[test]
    fn test_higher_engagement_predicts_higher() {
        let engine = ClvModel::mock();
        let low = FeatureVector::derive(&CustomerProfile {
            engagement_score: 0.2,
            ..Default::default()
        });
        let high = FeatureVector::derive(&CustomerProfile {
            engagement_score: 0.9,
            ..Default::default()
        });

        let low = engine.predict(&low).unwrap().predicted_value;
        let high = engine.predict(&high).unwrap().predicted_value;
        assert!(high > low);
    }

    #[test]
    fn test_bundled_artifacts() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
        let engine = ClvModel::load(
            &root.join("model/clv_model.json"),
            &root.join("model/selected_features.json"),
        )
        .unwrap();
        assert_eq!(engine.feature_dimension(), 11);

        let features = FeatureVector::derive(&CustomerProfile::default());
        let result = engine.predict(&features).unwrap();
        assert!((result.predicted_value - 2680.0).abs() < 1e-9);
    }

    #[test]
    fn test_shape_check() {
        let engine = ClvModel::mock();
        let err = engine.predict_slice(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            InferenceError::InvalidInputShape { expected: 11, actual: 2 }
        ));
    }

    #[test]
    fn test_feature_list_mismatch_is_fatal() {
        let model = RegressionModel {
            base_score: 0.0,
            trees: Vec::new(),
        };
        let shuffled: Vec<String> = FEATURE_NAMES.iter().rev().map(|s| s.to_string()).collect();
        let err = ClvModel::from_parts(model, shuffled).unwrap_err();
        assert!(matches!(err, ModelError::FeatureMismatch { .. }));
    }

    #[test]
    fn test_malformed_model_rejected() {
        let model = RegressionModel {
            base_score: 0.0,
            trees: vec![Tree {
                nodes: vec![Node::Split {
                    feature: 99,
                    threshold: 1.0,
                    left: 1,
                    right: 2,
                }],
            }],
        };
        let names = FEATURE_NAMES.iter().map(|s| s.to_string()).collect();
        assert!(matches!(
            ClvModel::from_parts(model, names),
            Err(ModelError::Malformed(_))
        ));
    }
}
