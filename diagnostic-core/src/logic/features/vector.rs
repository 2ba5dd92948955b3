//! Feature Vector - dense model input
//!
//! Built from sparse user input. Every position is filled: supplied values
//! are taken as-is (no clamping, no range checks), everything else falls
//! back to the training mean of that feature.

use std::collections::HashMap;

use ndarray::ArrayView1;

use super::layout::FeatureSchema;
use super::stats::FeatureStats;
use crate::error::CoreError;

/// Sparse per-request input: feature name -> value.
/// Names outside the schema are ignored.
pub type FeatureValues = HashMap<String, f64>;

// ============================================================================
// FEATURE VECTOR
// ============================================================================

/// Dense feature values in schema order.
///
/// Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    /// Create from raw values already in schema order
    pub fn from_vec(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// View for ndarray arithmetic
    pub fn view(&self) -> ArrayView1<'_, f64> {
        ArrayView1::from(self.values.as_slice())
    }

    /// Get feature by index
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Get feature by name
    pub fn get_by_name(&self, schema: &FeatureSchema, name: &str) -> Option<f64> {
        schema.index_of(name).and_then(|i| self.get(i))
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        Self::from_vec(values)
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Build a dense vector in schema order, imputing absent features with
/// their mean.
///
/// Fails with `MissingStatistics` when a feature is neither supplied nor
/// covered by `stats`.
pub fn build(
    values: &FeatureValues,
    schema: &FeatureSchema,
    stats: &FeatureStats,
) -> Result<FeatureVector, CoreError> {
    schema
        .iter()
        .map(|name| match values.get(name) {
            Some(&value) => Ok(value),
            None => stats
                .mean(name)
                .ok_or_else(|| CoreError::MissingStatistics(name.clone())),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(FeatureVector::from_vec)
}

// ============================================================================
// TESTS
// ============================================================================
