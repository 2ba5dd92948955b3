//! Model Module - Fitted predictors
//!
//! One trait, three families, one registry.
//! Adding a family means implementing `Predictor` and adding a
//! `ModelArtifact` variant; nothing downstream matches on model names.

pub mod inference;
pub mod scaler;
pub mod linear;
pub mod tree;
pub mod ensemble;
pub mod artifact;
pub mod registry;

// Re-export common types
pub use inference::{Explanation, ExplanationKind, ModelError, Predictor};
pub use scaler::StandardScaler;
pub use linear::LogisticRegression;
pub use tree::{DecisionTree, TREE_LEAF};
pub use ensemble::{GradientBoosting, RandomForest};
pub use artifact::ModelArtifact;
pub use registry::{ModelInfo, RegisteredModel, Registry, RegistryBuilder};
