use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Feature name -> signed coefficient or non-negative importance
pub type FeatureImportance = BTreeMap<String, f64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureContribution {
    pub name: String,
    pub weight: f64,
    pub magnitude: f64, // |weight|
}
