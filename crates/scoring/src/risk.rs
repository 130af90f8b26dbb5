//! Churn Risk Assessment

use customer_profile::CustomerProfile;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One additive risk rule
struct RiskRule {
    /// Points added when the rule triggers
    points: u32,
    /// Factor text shown to the user
    description: &'static str,
    /// Trigger predicate
    triggered: fn(&CustomerProfile) -> bool,
}

/// Risk rules, in evaluation order. Every rule is evaluated; points are
/// additive (maximum total 80).
const RISK_RULES: [RiskRule; 4] = [
    RiskRule {
        points: 25,
        description: "Customer hasn't purchased recently (high recency)",
        triggered: |p| p.recency_days > 45,
    },
    RiskRule {
        points: 20,
        description: "Low engagement score",
        triggered: |p| p.engagement_score < 0.4,
    },
    RiskRule {
        points: 20,
        description: "Above-average return rate",
        triggered: |p| p.return_rate > 0.15,
    },
    RiskRule {
        points: 15,
        description: "Inconsistent purchase pattern",
        triggered: |p| p.avg_purchase_gap_days > 30,
    },
];

/// Risk level derived from the total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classify a total risk score
    pub fn from_score(score: u32) -> Self {
        if score >= 60 {
            RiskLevel::High
        } else if score >= 30 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Get reader-facing summary
    pub fn summary(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Customer shows strong and consistent engagement",
            RiskLevel::Medium => "Monitor behavior - potential to shift segments",
            RiskLevel::High => "Significant risk of churn or reduced future value",
        }
    }
}

/// Result of a risk assessment
#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    /// Total score (0-100 scale, maximum reachable is 80)
    pub score: u32,
    /// Descriptions of the triggered factors, in rule order
    pub factors: Vec<&'static str>,
    /// Classification of the total score
    pub level: RiskLevel,
}

/// Assess churn risk for a profile.
///
/// Evaluates every rule in [`RISK_RULES`]; independent of the CLV prediction.
pub fn assess_risk(profile: &CustomerProfile) -> RiskAssessment {
    let mut score = 0;
    let mut factors = Vec::new();

    for rule in &RISK_RULES {
        if (rule.triggered)(profile) {
            score += rule.points;
            factors.push(rule.description);
        }
    }

    let level = RiskLevel::from_score(score);
    debug!(score, level = level.as_str(), "risk assessment complete");

    RiskAssessment { score, factors, level }
}
