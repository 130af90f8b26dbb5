//! Feature Vector Assembly

use customer_profile::CustomerProfile;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of features in the vector
pub const FEATURE_DIMENSION: usize = 11;

/// Canonical feature names, in model input order.
///
/// The model artifact stores its own copy of this list; the two are aligned
/// at load time and a mismatch aborts startup.
pub const FEATURE_NAMES: [&str; FEATURE_DIMENSION] = [
    "TotalSpend",
    "OrderHabit",
    "Tenure",
    "SpendPerOrder",
    "SpendRate",
    "EngagementScore",
    "ReturnImpact",
    "RecencySpendRatio",
    "RecentEngagement",
    "GapEngagement",
    "GapHabitScore",
];

/// Feature vector for CLV inference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Raw feature values, in [`FEATURE_NAMES`] order
    pub values: [f64; FEATURE_DIMENSION],
}

impl FeatureVector {
    /// Derive the feature vector from a customer profile.
    ///
    /// Pure arithmetic. `purchase_frequency` and `tenure_days` are validated
    /// to be at least 1 by the caller; the recency and gap ratios carry a +1
    /// offset in the denominator.
    pub fn derive(profile: &CustomerProfile) -> Self {
        let mut values = [0.0; FEATURE_DIMENSION];
        let mut idx = 0;

        values[idx] = profile.total_spend;
        idx += 1;
        values[idx] = profile.order_habit_score;
        idx += 1;
        values[idx] = profile.tenure_days as f64;
        idx += 1;
        values[idx] = profile.total_spend / profile.purchase_frequency;
        idx += 1;
        values[idx] = profile.total_spend / profile.tenure_days as f64;
        idx += 1;
        values[idx] = profile.engagement_score;
        idx += 1;
        values[idx] = profile.return_rate * profile.total_spend;
        idx += 1;
        values[idx] = profile.total_spend / (profile.recency_days + 1) as f64;
        idx += 1;
        values[idx] = profile.engagement_score / (profile.recency_days + 1) as f64;
        idx += 1;
        values[idx] = profile.engagement_score / (profile.avg_purchase_gap_days + 1) as f64;
        idx += 1;
        values[idx] = profile.order_habit_score / (profile.avg_purchase_gap_days + 1) as f64;

        debug!(spend_per_order = values[3], spend_rate = values[4], "derived feature vector");

        Self { values }
    }

    /// Ordered (name, value) pairs for display
    pub fn pairs(&self) -> Vec<(&'static str, f64)> {
        FEATURE_NAMES.iter().copied().zip(self.values).collect()
    }

    /// Look up a feature value by name
    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|i| self.values[i])
    }

    /// Spend per order (used by the recommendation rules)
    pub fn spend_per_order(&self) -> f64 {
        self.values[3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reference_profile() -> CustomerProfile {
        CustomerProfile {
            total_spend: 1000.0,
            purchase_frequency: 10.0,
            tenure_days: 180,
            avg_purchase_gap_days: 15,
            recency_days: 30,
            order_habit_score: 50.0,
            engagement_score: 0.5,
            return_rate: 0.1,
        }
    }

    #[test]
    fn test_reference_derivation() {
        let features = FeatureVector::derive(&reference_profile());

        assert_eq!(features.get("SpendPerOrder"), Some(100.0));
        assert!((features.get("SpendRate").unwrap() - 5.5556).abs() < 0.001);
        assert_eq!(features.get("ReturnImpact"), Some(100.0));
        assert!((features.get("RecencySpendRatio").unwrap() - 32.258).abs() < 0.01);
        assert!((features.get("RecentEngagement").unwrap() - 0.01613).abs() < 0.0001);
        assert_eq!(features.get("GapEngagement"), Some(0.03125));
        assert_eq!(features.get("GapHabitScore"), Some(3.125));
    }

    #[test]
    fn test_passthrough_features() {
        let features = FeatureVector::derive(&reference_profile());
        assert_eq!(features.get("TotalSpend"), Some(1000.0));
        assert_eq!(features.get("OrderHabit"), Some(50.0));
        assert_eq!(features.get("Tenure"), Some(180.0));
        assert_eq!(features.get("EngagementScore"), Some(0.5));
    }

    #[test]
    fn test_pair_order_matches_names() {
        let features = FeatureVector::derive(&reference_profile());
        let pairs = features.pairs();
        assert_eq!(pairs.len(), FEATURE_DIMENSION);
        for (i, (name, value)) in pairs.iter().enumerate() {
            assert_eq!(*name, FEATURE_NAMES[i]);
            assert_eq!(*value, features.values[i]);
        }
    }

    #[test]
    fn test_unknown_name() {
        let features = FeatureVector::derive(&reference_profile());
        assert_eq!(features.get("Recency"), None);
    }

    proptest! {
        #[test]
        fn test_derivation_is_total_and_finite(
            total_spend in 0.0..1_000_000.0f64,
            purchase_frequency in 1.0..10_000.0f64,
            tenure_days in 1u32..=365,
            avg_purchase_gap_days in 1u32..=200,
            recency_days in 1u32..=365,
            order_habit_score in 0.0..=100.0f64,
            engagement_score in 0.0..=1.0f64,
            return_rate in 0.0..=1.0f64,
        ) {
            let profile = CustomerProfile {
                total_spend,
                purchase_frequency,
                tenure_days,
                avg_purchase_gap_days,
                recency_days,
                order_habit_score,
                engagement_score,
                return_rate,
            };
            let features = FeatureVector::derive(&profile);
            prop_assert_eq!(features.values.len(), FEATURE_DIMENSION);
            for value in features.values {
                prop_assert!(value.is_finite(), "non-finite feature value: {}", value);
            }
        }
    }
}
