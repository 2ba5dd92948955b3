//! Multi-model prediction
//!
//! Policy: fail-fast. The first model that fails aborts the whole call with
//! its `PredictionFailed`; callers comparing models never see a partial map.

use std::collections::BTreeMap;

use super::result::PredictionResult;
use super::single::run;
use crate::error::CoreError;
use crate::logic::features::{build, FeatureSchema, FeatureStats, FeatureValues};
use crate::logic::model::Registry;

/// Run every registered model on the same input.
///
/// The vector is built once and shared, so every model sees an identical
/// input. Results are keyed by model name.
pub fn predict_all(
    values: &FeatureValues,
    registry: &Registry,
    schema: &FeatureSchema,
    stats: &FeatureStats,
) -> Result<BTreeMap<String, PredictionResult>, CoreError> {
    let vector = build(values, schema, stats)?;

    registry
        .iter()
        .map(|model| run(model, &vector, schema).map(|result| (model.name().to_string(), result)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::model::ModelError;
    use crate::logic::predict::predict_one;
    use crate::testing::{fixture_registry, schema_abc, stats_abc, Failing, Opaque};

    #[test]
    fn test_one_result_per_model() {
        let (schema, stats) = (schema_abc(), stats_abc());
        let registry = fixture_registry(&schema);

        let results = predict_all(&FeatureValues::new(), &registry, &schema, &stats).unwrap();

        assert_eq!(results.len(), registry.len());
        for name in registry.names() {
            assert!(results.contains_key(name));
        }
    }

    #[test]
    fn test_matches_independent_calls() {
        let (schema, stats) = (schema_abc(), stats_abc());
        let registry = fixture_registry(&schema);
        let values = FeatureValues::from([("a".to_string(), -0.5), ("c".to_string(), 3.5)]);

        let results = predict_all(&values, &registry, &schema, &stats).unwrap();

        for (name, result) in &results {
            let single = predict_one(name, &values, &registry, &schema, &stats).unwrap();
            assert_eq!(result, &single, "model {}", name);
        }
    }

    #[test]
    fn test_explanations_per_family() {
        let (schema, stats) = (schema_abc(), stats_abc());
        let registry = fixture_registry(&schema);

        let results = predict_all(&FeatureValues::new(), &registry, &schema, &stats).unwrap();

        assert_eq!(results["linear"].feature_importance.as_ref().unwrap()["b"], -2.0);
        assert_eq!(results["boosting"].feature_importance.as_ref().unwrap()["c"], 1.0);
        assert!(results["opaque"].feature_importance.is_none());
    }

    #[test]
    fn test_fail_fast() {
        let schema = schema_abc();
        let registry = Registry::builder(&schema)
            .register("healthy", Opaque::new(3))
            .unwrap()
            .register("broken", Failing::new(3))
            .unwrap()
            .build();

        let result = predict_all(&FeatureValues::new(), &registry, &schema, &stats_abc());
        match result {
            Err(CoreError::PredictionFailed { model, source }) => {
                assert_eq!(model, "broken");
                assert!(matches!(source, ModelError::Backend(_)));
            }
            other => panic!("expected PredictionFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_registry_gives_empty_map() {
        let schema = schema_abc();
        let registry = Registry::builder(&schema).build();

        let results = predict_all(&FeatureValues::new(), &registry, &schema, &stats_abc()).unwrap();
        assert!(results.is_empty());
    }
}
