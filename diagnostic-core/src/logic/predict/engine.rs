//! Inference Engine - the core's service-facing surface
//!
//! Owns the schema, statistics and registry for the life of the process.
//! All three are immutable and shared without locks; clones are cheap.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::multi::predict_all;
use super::result::PredictionResult;
use super::single::predict_one;
use crate::error::CoreError;
use crate::logic::features::{build, FeatureSchema, FeatureStats, FeatureValues, FeatureVector};
use crate::logic::model::{ModelInfo, Registry};

#[derive(Debug, Clone)]
pub struct InferenceEngine {
    schema: FeatureSchema,
    stats: Arc<FeatureStats>,
    registry: Arc<Registry>,
    defaults: Arc<FeatureVector>,
}

impl InferenceEngine {
    /// Assemble the engine.
    ///
    /// Builds the all-means vector up front, so a statistics table that
    /// does not cover the schema fails here with `MissingStatistics`
    /// instead of on the first request.
    pub fn new(schema: FeatureSchema, stats: FeatureStats, registry: Registry) -> Result<Self, CoreError> {
        let defaults = build(&FeatureValues::new(), &schema, &stats)?;

        Ok(Self {
            schema,
            stats: Arc::new(stats),
            registry: Arc::new(registry),
            defaults: Arc::new(defaults),
        })
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn stats(&self) -> &FeatureStats {
        &self.stats
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Vector used when the caller supplies no values
    pub fn defaults(&self) -> &FeatureVector {
        &self.defaults
    }

    pub fn predict_one(&self, model_name: &str, values: &FeatureValues) -> Result<PredictionResult, CoreError> {
        predict_one(model_name, values, &self.registry, &self.schema, &self.stats)
    }

    pub fn predict_all(&self, values: &FeatureValues) -> Result<BTreeMap<String, PredictionResult>, CoreError> {
        predict_all(values, &self.registry, &self.schema, &self.stats)
    }

    /// Model names in registration order
    pub fn list_models(&self) -> Vec<&str> {
        self.registry.names().collect()
    }

    pub fn describe_models(&self) -> Vec<ModelInfo> {
        self.registry.iter().map(|m| m.info()).collect()
    }
}
