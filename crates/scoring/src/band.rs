//! CLV Banding

use serde::{Deserialize, Serialize};

/// Band classification of a predicted CLV value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClvBand {
    Low,
    Medium,
    High,
}

impl ClvBand {
    /// Classify a predicted 12-month CLV
    pub fn from_value(predicted_value: f64) -> Self {
        if predicted_value < 1000.0 {
            ClvBand::Low
        } else if predicted_value < 5000.0 {
            ClvBand::Medium
        } else {
            ClvBand::High
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ClvBand::Low => "low",
            ClvBand::Medium => "medium",
            ClvBand::High => "high",
        }
    }

    /// Get advisory text for the band
    pub fn advisory(&self) -> &'static str {
        match self {
            ClvBand::Low => "Low CLV - Consider retention strategies",
            ClvBand::Medium => "Medium CLV - Good growth potential",
            ClvBand::High => "High CLV - Excellent customer!",
        }
    }
}
