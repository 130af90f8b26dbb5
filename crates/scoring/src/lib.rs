//! Customer Scoring Rules
//!
//! Rule-based heuristics evaluated alongside model inference: churn risk
//! scoring, lifecycle staging, CLV banding, and business recommendations.
//! Each rule set is an ordered table evaluated in fixed order, independent of
//! the model output.

mod band;
mod lifecycle;
mod recommend;
mod risk;

pub use band::ClvBand;
pub use lifecycle::LifecycleStage;
pub use recommend::generate_recommendations;
pub use risk::{assess_risk, RiskAssessment, RiskLevel};
