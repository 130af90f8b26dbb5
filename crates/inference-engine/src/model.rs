//! Regression Model Representation
//!
//! A gradient-boosted tree ensemble exported to JSON by the training
//! pipeline. Trees are stored as flat node arrays rooted at index 0.

use crate::ModelError;
use serde::{Deserialize, Serialize};

/// One node of a decision tree
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Interior split: go left when `features[feature] < threshold`
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Terminal leaf contributing `value` to the ensemble sum
    Leaf { value: f64 },
}

/// A single regression tree as a flat node array
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    /// Evaluate the tree on a feature slice.
    ///
    /// Assumes the tree passed [`Tree::validate`]: node 0 exists, child
    /// indices are in bounds and strictly increasing, feature indices are
    /// within the input dimension.
    fn evaluate(&self, features: &[f64]) -> f64 {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if features[*feature] < *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    /// Check structural invariants for a given input dimension
    fn validate(&self, tree_index: usize, dimension: usize) -> Result<(), ModelError> {
        if self.nodes.is_empty() {
            return Err(ModelError::Malformed(format!("tree {tree_index} has no nodes")));
        }
        for (i, node) in self.nodes.iter().enumerate() {
            if let Node::Split {
                feature,
                left,
                right,
                ..
            } = node
            {
                if *feature >= dimension {
                    return Err(ModelError::Malformed(format!(
                        "tree {tree_index} node {i} splits on feature {feature}, dimension is {dimension}"
                    )));
                }
                // Children must point forward, which also rules out cycles.
                for &child in [left, right] {
                    if child <= i || child >= self.nodes.len() {
                        return Err(ModelError::Malformed(format!(
                            "tree {tree_index} node {i} has invalid child index {child}"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Gradient-boosted regression ensemble
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionModel {
    /// Prediction baseline added before tree contributions
    pub base_score: f64,
    /// Trees, summed in order
    pub trees: Vec<Tree>,
}

impl RegressionModel {
    /// Validate every tree against the expected input dimension
    pub fn validate(&self, dimension: usize) -> Result<(), ModelError> {
        if !self.base_score.is_finite() {
            return Err(ModelError::Malformed("base_score is not finite".to_string()));
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(i, dimension)?;
        }
        Ok(())
    }

    /// Evaluate the ensemble on a feature slice
    pub fn predict(&self, features: &[f64]) -> f64 {
        self.base_score + self.trees.iter().map(|t| t.evaluate(features)).sum::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_split_model() -> RegressionModel {
        RegressionModel {
            base_score: 100.0,
            trees: vec![Tree {
                nodes: vec![
                    Node::Split {
                        feature: 0,
                        threshold: 10.0,
                        left: 1,
                        right: 2,
                    },
                    Node::Leaf { value: -5.0 },
                    Node::Leaf { value: 5.0 },
                ],
            }],
        }
    }

    #[test]
    fn test_split_routing() {
        let model = single_split_model();
        assert_eq!(model.predict(&[9.9]), 95.0);
        assert_eq!(model.predict(&[10.0]), 105.0);
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert!(single_split_model().validate(1).is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_feature() {
        let model = single_split_model();
        let err = model.validate(0).unwrap_err();
        assert!(err.to_string().contains("feature 0"));
    }

    #[test]
    fn test_validate_rejects_backward_child() {
        let model = RegressionModel {
            base_score: 0.0,
            trees: vec![Tree {
                nodes: vec![
                    Node::Split {
                        feature: 0,
                        threshold: 1.0,
                        left: 0,
                        right: 1,
                    },
                    Node::Leaf { value: 1.0 },
                ],
            }],
        };
        assert!(model.validate(1).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let json = r#"{
            "base_score": 50.0,
            "trees": [
                {"nodes": [
                    {"feature": 2, "threshold": 0.5, "left": 1, "right": 2},
                    {"value": -1.0},
                    {"value": 1.0}
                ]}
            ]
        }"#;
        let model: RegressionModel = serde_json::from_str(json).unwrap();
        assert!(model.validate(3).is_ok());
        assert_eq!(model.predict(&[0.0, 0.0, 0.0]), 49.0);
        assert_eq!(model.predict(&[0.0, 0.0, 0.7]), 51.0);
    }
}
