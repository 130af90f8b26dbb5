//! Profile Validator for Range Checking

use crate::error::ValidationError;
use crate::profile::CustomerProfile;
use serde::{Deserialize, Serialize};

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Total spend valid range (currency units)
    pub total_spend_range: (f64, f64),
    /// Purchase frequency valid range (count)
    pub purchase_frequency_range: (f64, f64),
    /// Tenure valid range (days)
    pub tenure_range: (f64, f64),
    /// Average purchase gap valid range (days)
    pub gap_range: (f64, f64),
    /// Recency valid range (days)
    pub recency_range: (f64, f64),
    /// Order habit score valid range
    pub order_habit_range: (f64, f64),
    /// Engagement score valid range
    pub engagement_range: (f64, f64),
    /// Return rate valid range
    pub return_rate_range: (f64, f64),
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            total_spend_range: (0.0, f64::MAX),
            purchase_frequency_range: (1.0, f64::MAX),
            tenure_range: (1.0, 365.0),
            gap_range: (1.0, 200.0),
            recency_range: (1.0, 365.0),
            order_habit_range: (0.0, 100.0),
            engagement_range: (0.0, 1.0),
            return_rate_range: (0.0, 1.0),
        }
    }
}

/// Result of validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether all values are valid
    pub valid: bool,
    /// List of validation errors
    pub errors: Vec<ValidationError>,
    /// Number of fields validated
    pub fields_checked: usize,
}

/// Validator for customer profiles
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a single value against a range
    pub fn validate_range(
        &self,
        field: &'static str,
        value: f64,
        range: (f64, f64),
    ) -> Result<(), ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite { field });
        }
        if value < range.0 || value > range.1 {
            Err(ValidationError::OutOfRange {
                field,
                value,
                min: range.0,
                max: range.1,
            })
        } else {
            Ok(())
        }
    }

    /// Validate every field of a profile, collecting all violations
    pub fn validate(&self, profile: &CustomerProfile) -> ValidationResult {
        let checks = [
            self.validate_range("total_spend", profile.total_spend, self.config.total_spend_range),
            self.validate_range(
                "purchase_frequency",
                profile.purchase_frequency,
                self.config.purchase_frequency_range,
            ),
            self.validate_range("tenure_days", profile.tenure_days as f64, self.config.tenure_range),
            self.validate_range(
                "avg_purchase_gap_days",
                profile.avg_purchase_gap_days as f64,
                self.config.gap_range,
            ),
            self.validate_range("recency_days", profile.recency_days as f64, self.config.recency_range),
            self.validate_range(
                "order_habit_score",
                profile.order_habit_score,
                self.config.order_habit_range,
            ),
            self.validate_range("engagement_score", profile.engagement_score, self.config.engagement_range),
            self.validate_range("return_rate", profile.return_rate, self.config.return_rate_range),
        ];

        let fields_checked = checks.len();
        let errors: Vec<ValidationError> = checks.into_iter().filter_map(Result::err).collect();

        ValidationResult {
            valid: errors.is_empty(),
            errors,
            fields_checked,
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
