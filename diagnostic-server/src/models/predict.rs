//! Request and response bodies for prediction routes

use std::collections::BTreeMap;

use diagnostic_core::FeatureValues;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct PredictRequest {
    /// Falls back to the configured default model
    pub model: Option<String>,
    #[serde(default)]
    pub features: FeatureValues,
}

#[derive(Debug, Default, Deserialize)]
pub struct PredictAllRequest {
    #[serde(default)]
    pub features: FeatureValues,
}

#[derive(Debug, Serialize)]
pub struct MetadataResponse {
    pub feature_names: Vec<String>,
    pub target_names: Vec<String>,
    pub n_features: usize,
    pub n_samples: u64,
    pub class_distribution: BTreeMap<String, u64>,
    pub top_features: Vec<String>,
    pub layout_hash: String,
}
