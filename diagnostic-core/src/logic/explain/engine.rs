use std::cmp::Ordering;

use super::types::{FeatureContribution, FeatureImportance};
use crate::logic::features::FeatureSchema;
use crate::logic::model::{Explanation, Predictor};

/// Per-feature explanation of a predictor, keyed by schema name.
///
/// The predictor's weight array is zipped with `schema` position by
/// position, so it must be in training-time column order. Returns `None`
/// for families without an explanation capability.
pub fn explain(predictor: &dyn Predictor, schema: &FeatureSchema) -> Option<FeatureImportance> {
    let weights = match predictor.explain() {
        Explanation::Linear(coefficients) => coefficients,
        Explanation::ImportanceBased(importances) => importances,
        Explanation::None => return None,
    };

    Some(
        schema
            .iter()
            .zip(weights)
            .map(|(name, &weight)| (name.clone(), weight))
            .collect(),
    )
}

/// Top `k` features by absolute weight, largest first.
/// Ties keep name order.
pub fn ranked(importance: &FeatureImportance, k: usize) -> Vec<FeatureContribution> {
    let mut contributions: Vec<FeatureContribution> = importance
        .iter()
        .map(|(name, &weight)| FeatureContribution {
            name: name.clone(),
            weight,
            magnitude: weight.abs(),
        })
        .collect();

    // Sort by magnitude DESC
    contributions.sort_by(|a, b| b.magnitude.partial_cmp(&a.magnitude).unwrap_or(Ordering::Equal));
    contributions.truncate(k);
    contributions
}
