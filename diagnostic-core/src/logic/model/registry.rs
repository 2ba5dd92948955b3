//! Model Registry - named fitted predictors
//!
//! Built once at startup through `RegistryBuilder`, read-only afterwards.
//! Registration runs each predictor's structural checks, lines it up with
//! the feature schema and records its explanation kind, so nothing is
//! re-derived per request.

use std::sync::Arc;

use serde::Serialize;

use super::inference::{ExplanationKind, Predictor};
use crate::error::CoreError;
use crate::logic::features::FeatureSchema;

/// A predictor plus what registration learned about it
#[derive(Debug, Clone)]
pub struct RegisteredModel {
    name: String,
    predictor: Arc<dyn Predictor>,
    explanation: ExplanationKind,
}

impl RegisteredModel {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn predictor(&self) -> &dyn Predictor {
        self.predictor.as_ref()
    }

    pub fn explanation_kind(&self) -> ExplanationKind {
        self.explanation
    }

    pub fn info(&self) -> ModelInfo {
        ModelInfo {
            name: self.name.clone(),
            explanation: self.explanation,
        }
    }
}

/// Public description of a registered model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    pub name: String,
    pub explanation: ExplanationKind,
}

/// Immutable name -> predictor map, iterated in registration order
#[derive(Debug, Clone, Default)]
pub struct Registry {
    models: Vec<RegisteredModel>,
}

impl Registry {
    pub fn builder(schema: &FeatureSchema) -> RegistryBuilder<'_> {
        RegistryBuilder {
            schema,
            models: Vec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredModel> {
        self.models.iter().find(|m| m.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Model names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(|m| m.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RegisteredModel> {
        self.models.iter()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// Collects predictors for a fixed schema
#[derive(Debug)]
pub struct RegistryBuilder<'a> {
    schema: &'a FeatureSchema,
    models: Vec<RegisteredModel>,
}

impl RegistryBuilder<'_> {
    pub fn register<P>(self, name: impl Into<String>, predictor: P) -> Result<Self, CoreError>
    where
        P: Predictor + 'static,
    {
        self.register_arc(name, Arc::new(predictor))
    }

    /// Register a shared predictor.
    ///
    /// Fails when the name is taken, when the predictor is malformed, or
    /// when its input width or explanation vector does not line up with
    /// the schema.
    pub fn register_arc(
        mut self,
        name: impl Into<String>,
        predictor: Arc<dyn Predictor>,
    ) -> Result<Self, CoreError> {
        let name = name.into();
        if self.models.iter().any(|m| m.name == name) {
            return Err(CoreError::DuplicateModel(name));
        }

        let expected = self.schema.len();
        let mismatch = |actual: usize| CoreError::SchemaMismatch {
            model: name.clone(),
            expected,
            actual,
        };

        if predictor.n_features() != expected {
            return Err(mismatch(predictor.n_features()));
        }

        predictor.validate().map_err(|source| CoreError::InvalidModel {
            model: name.clone(),
            source,
        })?;

        let explanation = predictor.explain();
        if let Some(weights) = explanation.weights() {
            if weights.len() != expected {
                return Err(mismatch(weights.len()));
            }
        }
        let explanation = explanation.kind();

        self.models.push(RegisteredModel {
            name,
            predictor,
            explanation,
        });
        Ok(self)
    }

    pub fn build(self) -> Registry {
        Registry {
            models: self.models,
        }
    }
}
