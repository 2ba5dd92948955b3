//! Single-model prediction

use super::result::{check_label, check_probabilities, ClassProbabilities, PredictionResult};
use crate::error::CoreError;
use crate::logic::explain::explain;
use crate::logic::features::{build, FeatureSchema, FeatureStats, FeatureValues, FeatureVector};
use crate::logic::model::{ModelError, RegisteredModel, Registry};

/// Run one named model on sparse input.
///
/// Fails with `UnknownModel` before any work is done when `model_name` is
/// not registered.
pub fn predict_one(
    model_name: &str,
    values: &FeatureValues,
    registry: &Registry,
    schema: &FeatureSchema,
    stats: &FeatureStats,
) -> Result<PredictionResult, CoreError> {
    let model = registry
        .get(model_name)
        .ok_or_else(|| CoreError::UnknownModel(model_name.to_string()))?;

    let vector = build(values, schema, stats)?;
    run(model, &vector, schema)
}

/// Run a registered model on an already built vector
pub(crate) fn run(
    model: &RegisteredModel,
    vector: &FeatureVector,
    schema: &FeatureSchema,
) -> Result<PredictionResult, CoreError> {
    let predictor = model.predictor();
    let failed = |source: ModelError| CoreError::PredictionFailed {
        model: model.name().to_string(),
        source,
    };

    let prediction = predictor.predict(vector).and_then(check_label).map_err(failed)?;
    let proba = predictor.predict_proba(vector).map_err(failed)?;
    check_probabilities(proba).map_err(failed)?;

    Ok(PredictionResult {
        prediction,
        probabilities: ClassProbabilities::from_proba(proba),
        feature_importance: explain(predictor, schema),
    })
}
