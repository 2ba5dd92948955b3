//! Loaded-model state
//!
//! `NotLoaded` is distinct from a loaded registry that happens to be empty:
//! the server still starts without artifacts, answers health checks with
//! 503, and refuses model-dependent routes.

use std::sync::Arc;

use diagnostic_core::{InferenceEngine, LoadedArtifacts};

use crate::{AppError, AppResult};

#[derive(Debug, Clone)]
pub enum ModelState {
    NotLoaded { reason: String },
    Loaded(Arc<LoadedArtifacts>),
}

impl ModelState {
    pub fn loaded(artifacts: LoadedArtifacts) -> Self {
        ModelState::Loaded(Arc::new(artifacts))
    }

    pub fn not_loaded(reason: impl Into<String>) -> Self {
        ModelState::NotLoaded { reason: reason.into() }
    }

    pub fn artifacts(&self) -> AppResult<&LoadedArtifacts> {
        match self {
            ModelState::Loaded(artifacts) => Ok(artifacts.as_ref()),
            ModelState::NotLoaded { .. } => Err(AppError::ModelsNotLoaded),
        }
    }

    pub fn engine(&self) -> AppResult<&InferenceEngine> {
        self.artifacts().map(|a| &a.engine)
    }
}
