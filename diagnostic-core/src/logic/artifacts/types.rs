use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::logic::features::LayoutInfo;
use crate::logic::predict::InferenceEngine;

/// Dataset description written next to the fitted models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetMetadata {
    /// Training-time column order
    pub feature_names: Vec<String>,
    pub target_names: Vec<String>,
    pub n_samples: u64,
    /// Label -> sample count
    #[serde(default)]
    pub class_distribution: BTreeMap<String, u64>,
}

/// Full dataset table for visualization, passed through untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub features: Vec<String>,
    pub data: Vec<Vec<f64>>,
    pub target: Vec<u8>,
}

/// Everything the serving layer needs, loaded once
#[derive(Debug, Clone)]
pub struct LoadedArtifacts {
    pub engine: InferenceEngine,
    pub metadata: DatasetMetadata,
    pub top_features: Vec<String>,
    pub dataset: Option<Dataset>,
    pub layout: LayoutInfo,
    pub loaded_at: DateTime<Utc>,
}
