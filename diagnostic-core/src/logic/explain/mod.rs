//! Explain Module - per-feature explanation across predictor families

pub mod engine;
pub mod types;

pub use engine::{explain, ranked};
pub use types::{FeatureContribution, FeatureImportance};
