//! Diagnostic Core - Inference Serving Pipeline
//!
//! Serves breast-cancer diagnostic predictions from several fitted
//! classifiers over one fixed feature schema.
//!
//! ## Layout
//! - `logic/features/` - Feature schema, statistics, vector builder
//! - `logic/model/` - Predictor trait, fitted families, registry
//! - `logic/explain/` - Per-feature explanation extractor
//! - `logic/predict/` - Single/multi model prediction, `InferenceEngine`
//! - `logic/artifacts/` - Startup loader for fitted artifacts
//!
//! ```text
//! FeatureValues ──► build() ──► FeatureVector ──► Predictor(s) ──► PredictionResult
//!                     ▲                              │
//!               FeatureStats                    explain() ──► FeatureImportance
//! ```

pub mod constants;
pub mod error;
pub mod logic;

#[cfg(test)]
mod testing;

pub use error::{CoreError, CoreResult};
pub use logic::artifacts::{load_from_dir, LoadError, LoadedArtifacts};
pub use logic::explain::{explain, FeatureImportance};
pub use logic::features::{build, FeatureSchema, FeatureStat, FeatureStats, FeatureValues, FeatureVector};
pub use logic::model::{
    DecisionTree, Explanation, ExplanationKind, GradientBoosting, LogisticRegression, ModelError,
    ModelInfo, Predictor, RandomForest, Registry, StandardScaler,
};
pub use logic::predict::{predict_all, predict_one, ClassProbabilities, InferenceEngine, PredictionResult};
