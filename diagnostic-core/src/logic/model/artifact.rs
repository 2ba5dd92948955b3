//! Serialized form of a fitted predictor
//!
//! Artifacts are plain serde dumps of the family structs, tagged by `kind`:
//!
//! ```json
//! { "kind": "logistic_regression", "coefficients": [...], "intercept": 0.3 }
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::ensemble::{GradientBoosting, RandomForest};
use super::inference::{ModelError, Predictor};
use super::linear::LogisticRegression;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    LogisticRegression(LogisticRegression),
    RandomForest(RandomForest),
    GradientBoosting(GradientBoosting),
}

impl ModelArtifact {
    pub fn family(&self) -> &'static str {
        match self {
            ModelArtifact::LogisticRegression(_) => "logistic_regression",
            ModelArtifact::RandomForest(_) => "random_forest",
            ModelArtifact::GradientBoosting(_) => "gradient_boosting",
        }
    }

    /// Validate the structure and hand back a shareable predictor
    pub fn into_predictor(self) -> Result<Arc<dyn Predictor>, ModelError> {
        Ok(match self {
            ModelArtifact::LogisticRegression(m) => {
                m.validate()?;
                Arc::new(m)
            }
            ModelArtifact::RandomForest(m) => {
                m.validate()?;
                Arc::new(m)
            }
            ModelArtifact::GradientBoosting(m) => {
                m.validate()?;
                Arc::new(m)
            }
        })
    }
}
