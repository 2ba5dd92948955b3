//! Error handling

use crate::logic::model::ModelError;

pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the inference pipeline.
///
/// `UnknownModel` is the only one a client can cause. `MissingStatistics`,
/// `SchemaMismatch`, `InvalidModel` and the duplicate errors are configuration
/// defects and are expected at startup only.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Model {0} not found")]
    UnknownModel(String),

    #[error("no statistics for feature '{0}'")]
    MissingStatistics(String),

    #[error("prediction with model '{model}' failed: {source}")]
    PredictionFailed {
        model: String,
        #[source]
        source: ModelError,
    },

    #[error("model '{model}' is aligned to {actual} features, schema has {expected}")]
    SchemaMismatch {
        model: String,
        expected: usize,
        actual: usize,
    },

    #[error("model '{model}' is malformed: {source}")]
    InvalidModel {
        model: String,
        #[source]
        source: ModelError,
    },

    #[error("duplicate feature '{0}' in schema")]
    DuplicateFeature(String),

    #[error("model '{0}' is already registered")]
    DuplicateModel(String),
}

impl CoreError {
    /// True for errors a caller caused (as opposed to server-side defects)
    pub fn is_client_error(&self) -> bool {
        matches!(self, CoreError::UnknownModel(_))
    }
}
