//! Feature Engineering Engine
//!
//! Derives the engineered feature vector consumed by the CLV regression model.

mod features;

pub use features::{FeatureVector, FEATURE_DIMENSION, FEATURE_NAMES};
