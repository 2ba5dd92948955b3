//! Artifact Loader
//!
//! Reads the fitted models, dataset metadata and feature statistics from a
//! directory and assembles an `InferenceEngine`.
//!
//! ```text
//! models/
//! ├── metadata.json            (required)
//! ├── feature_stats.json       (required)
//! ├── logistic_regression.json (required)
//! ├── random_forest.json       (required)
//! ├── gradient_boosting.json   (required)
//! ├── top_features.json        (optional, derived from the linear model)
//! └── dataset.json             (optional)
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::types::{Dataset, DatasetMetadata, LoadedArtifacts};
use crate::constants::{
    DATASET_FILE, DEFAULT_MODEL, FEATURE_STATS_FILE, METADATA_FILE, MODEL_NAMES, TOP_FEATURES_FILE,
    TOP_FEATURE_COUNT,
};
use crate::error::CoreError;
use crate::logic::explain::{explain, ranked};
use crate::logic::features::{FeatureSchema, FeatureStats, LayoutInfo};
use crate::logic::model::{ModelArtifact, ModelError, Registry};
use crate::logic::predict::InferenceEngine;

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("models directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("missing model files: {}", .0.join(", "))]
    MissingFiles(Vec<String>),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid model '{name}': {source}")]
    InvalidModel {
        name: String,
        #[source]
        source: ModelError,
    },

    #[error(transparent)]
    Inconsistent(#[from] CoreError),
}

impl LoadError {
    /// Artifacts are present but contradict each other (schema vs stats vs
    /// models). The serving layer must not start on such a set.
    pub fn is_configuration_defect(&self) -> bool {
        matches!(self, LoadError::Inconsistent(_))
    }
}

// ============================================================================
// LOADING
// ============================================================================

/// Files that must exist before anything is parsed
pub fn required_files() -> Vec<String> {
    let mut files = vec![METADATA_FILE.to_string(), FEATURE_STATS_FILE.to_string()];
    files.extend(MODEL_NAMES.iter().map(|name| model_file(name)));
    files
}

fn model_file(name: &str) -> String {
    format!("{}.json", name)
}

/// Load every artifact from `dir`
pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<LoadedArtifacts, LoadError> {
    let dir = dir.as_ref();
    log::info!("Looking for models in: {}", dir.display());

    if !dir.is_dir() {
        return Err(LoadError::DirectoryNotFound(dir.to_path_buf()));
    }

    // Report every missing file at once
    let missing: Vec<String> = required_files()
        .into_iter()
        .filter(|file| !dir.join(file).is_file())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingFiles(missing));
    }

    let metadata: DatasetMetadata = read_json(&dir.join(METADATA_FILE))?;
    let stats: FeatureStats = read_json(&dir.join(FEATURE_STATS_FILE))?;
    let schema = FeatureSchema::new(metadata.feature_names.iter().cloned())?;

    log::info!("Loading models...");
    let mut builder = Registry::builder(&schema);
    for name in MODEL_NAMES {
        let artifact: ModelArtifact = read_json(&dir.join(model_file(name)))?;
        log::debug!("{}: {} artifact", name, artifact.family());

        let predictor = artifact.into_predictor().map_err(|source| LoadError::InvalidModel {
            name: name.to_string(),
            source,
        })?;
        builder = builder.register_arc(*name, predictor)?;
    }
    let registry = builder.build();

    let layout = LayoutInfo::of(&schema);
    let engine = InferenceEngine::new(schema, stats, registry)?;

    let top_features = match read_optional_json::<Vec<String>>(&dir.join(TOP_FEATURES_FILE))? {
        Some(top) => top,
        None => derive_top_features(&engine),
    };
    let dataset: Option<Dataset> = read_optional_json(&dir.join(DATASET_FILE))?;

    log::info!(
        "Loaded {} models over {} features (layout {:08x})",
        engine.registry().len(),
        layout.feature_count,
        layout.hash
    );

    Ok(LoadedArtifacts {
        engine,
        metadata,
        top_features,
        dataset,
        layout,
        loaded_at: chrono::Utc::now(),
    })
}

/// Top features by absolute coefficient of the default linear model
fn derive_top_features(engine: &InferenceEngine) -> Vec<String> {
    engine
        .registry()
        .get(DEFAULT_MODEL)
        .and_then(|model| explain(model.predictor(), engine.schema()))
        .map(|importance| {
            ranked(&importance, TOP_FEATURE_COUNT)
                .into_iter()
                .map(|c| c.name)
                .collect()
        })
        .unwrap_or_default()
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn read_optional_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, LoadError> {
    if !path.is_file() {
        log::debug!("Optional artifact {} not present", path.display());
        return Ok(None);
    }
    read_json(path).map(Some)
}

// ============================================================================
// TESTS
// ============================================================================
