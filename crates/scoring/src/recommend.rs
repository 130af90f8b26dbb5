//! Business Recommendation Rules

use customer_profile::CustomerProfile;
use feature_engine::FeatureVector;

/// One recommendation rule
struct RecommendationRule {
    /// Advisory text appended when the rule triggers
    advisory: &'static str,
    /// Trigger predicate over the profile and its derived features
    triggered: fn(&CustomerProfile, &FeatureVector) -> bool,
}

/// Recommendation rules, in evaluation order. Output order is the fixed rule
/// order here, never data-dependent.
const RECOMMENDATION_RULES: [RecommendationRule; 5] = [
    RecommendationRule {
        advisory: "Increase customer engagement through targeted campaigns",
        triggered: |p, _| p.engagement_score < 0.4,
    },
    RecommendationRule {
        advisory: "Launch win-back campaign for inactive customer",
        triggered: |p, _| p.recency_days > 45,
    },
    RecommendationRule {
        advisory: "Review product quality to reduce returns",
        triggered: |p, _| p.return_rate > 0.15,
    },
    RecommendationRule {
        advisory: "Focus on upselling to increase order value",
        triggered: |_, f| f.spend_per_order() < 200.0,
    },
    RecommendationRule {
        advisory: "Implement loyalty programs to increase purchase frequency",
        triggered: |p, _| p.avg_purchase_gap_days > 30,
    },
];

/// Generate recommendations for a profile and its derived features.
///
/// Returns between 0 and 5 advisories; an empty list means the customer shows
/// healthy engagement patterns and is a success case for callers.
pub fn generate_recommendations(
    profile: &CustomerProfile,
    features: &FeatureVector,
) -> Vec<&'static str> {
    RECOMMENDATION_RULES
        .iter()
        .filter(|rule| (rule.triggered)(profile, features))
        .map(|rule| rule.advisory)
        .collect()
}
