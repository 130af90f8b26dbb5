//! Customer Lifecycle Staging

use serde::{Deserialize, Serialize};

/// Lifecycle stage estimated from customer tenure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleStage {
    /// Under 2 months of tenure
    New,
    /// 2 to 5 months
    Early,
    /// 5 to 10 months
    Established,
    /// 10 months and beyond
    Loyal,
}

impl LifecycleStage {
    /// Classify a tenure in days
    pub fn from_tenure(tenure_days: u32) -> Self {
        if tenure_days < 60 {
            LifecycleStage::New
        } else if tenure_days < 150 {
            LifecycleStage::Early
        } else if tenure_days < 300 {
            LifecycleStage::Established
        } else {
            LifecycleStage::Loyal
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleStage::New => "new",
            LifecycleStage::Early => "early",
            LifecycleStage::Established => "established",
            LifecycleStage::Loyal => "loyal",
        }
    }

    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            LifecycleStage::New => "New Customer (< 2 months)",
            LifecycleStage::Early => "Early Stage Customer (2-5 months)",
            LifecycleStage::Established => "Established Customer (5-10 months)",
            LifecycleStage::Loyal => "Loyal Customer (10+ months)",
        }
    }
}
