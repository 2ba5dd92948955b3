//! Features Module - Feature schema and vector construction
//!
//! Turns sparse user input into the dense, ordered vector every
//! predictor consumes.

pub mod layout;
pub mod stats;
pub mod vector;


// Re-export common types
pub use layout::{FeatureSchema, LayoutInfo};
pub use stats::{FeatureStat, FeatureStats};
pub use vector::{build, FeatureValues, FeatureVector};
