//! Raw Customer Attribute Record

use serde::{Deserialize, Serialize};

/// Raw behavioral and financial attributes for a single customer.
///
/// One profile is supplied per evaluation. Integer day counts are floored at 1
/// by the input contract, which keeps the day-based ratios downstream away
/// from zero denominators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerProfile {
    /// Total spend to date (currency units)
    pub total_spend: f64,
    /// Number of purchases made
    pub purchase_frequency: f64,
    /// Days since relationship start (1-365)
    pub tenure_days: u32,
    /// Average days between purchases (1-200)
    pub avg_purchase_gap_days: u32,
    /// Days since last purchase (1-365)
    pub recency_days: u32,
    /// Ordering consistency score (0-100)
    pub order_habit_score: f64,
    /// Engagement score (0-1)
    pub engagement_score: f64,
    /// Fraction of purchases returned (0-1)
    pub return_rate: f64,
}

impl Default for CustomerProfile {
    fn default() -> Self {
        Self {
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
}
