//! Shared test fixtures: a three-feature schema and synthetic predictors.

use crate::logic::features::{FeatureSchema, FeatureStat, FeatureStats, FeatureVector};
use crate::logic::model::{
    DecisionTree, GradientBoosting, LogisticRegression, ModelError, Predictor, RandomForest, Registry,
};

/// Schema `["a", "b", "c"]`
pub fn schema_abc() -> FeatureSchema {
    FeatureSchema::new(["a", "b", "c"]).unwrap()
}

/// Means a = 1, b = 0, c = 2
pub fn stats_abc() -> FeatureStats {
    [
        ("a", FeatureStat::new(-10.0, 10.0, 1.0, 2.0)),
        ("b", FeatureStat::new(-1.0, 1.0, 0.0, 0.5)),
        ("c", FeatureStat::new(0.0, 4.0, 2.0, 1.0)),
    ]
    .into_iter()
    .collect()
}

/// Registry with one model of every family plus an unexplainable one:
/// `linear`, `forest`, `boosting`, `opaque`
pub fn fixture_registry(schema: &FeatureSchema) -> Registry {
    Registry::builder(schema)
        .register("linear", LogisticRegression::new(vec![1.0, -2.0, 0.5], 0.0))
        .unwrap()
        .register(
            "forest",
            RandomForest::new(
                vec![
                    DecisionTree::stump(0, 0.0, vec![9.0, 1.0], vec![2.0, 8.0]),
                    DecisionTree::stump(1, 0.5, vec![3.0, 7.0], vec![6.0, 4.0]),
                ],
                vec![0.5, 0.5, 0.0],
            ),
        )
        .unwrap()
        .register(
            "boosting",
            GradientBoosting::new(
                0.2,
                0.5,
                vec![DecisionTree::stump(2, 1.0, vec![-1.5], vec![1.0])],
                vec![0.0, 0.0, 1.0],
            ),
        )
        .unwrap()
        .register("opaque", Opaque::new(3))
        .unwrap()
        .build()
}

/// Predictor without explanation capability; leans benign
#[derive(Debug)]
pub struct Opaque {
    n_features: usize,
}

impl Opaque {
    pub fn new(n_features: usize) -> Self {
        Self { n_features }
    }
}

impl Predictor for Opaque {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict_proba(&self, _x: &FeatureVector) -> Result<[f64; 2], ModelError> {
        Ok([0.4, 0.6])
    }
}

/// Returns the same probabilities for every input
#[derive(Debug)]
pub struct Fixed {
    n_features: usize,
    proba: [f64; 2],
}

impl Fixed {
    pub fn new(n_features: usize, proba: [f64; 2]) -> Self {
        Self { n_features, proba }
    }
}

impl Predictor for Fixed {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict_proba(&self, _x: &FeatureVector) -> Result<[f64; 2], ModelError> {
        Ok(self.proba)
    }
}

/// Always fails at inference time
#[derive(Debug)]
pub struct Failing {
    n_features: usize,
}

impl Failing {
    pub fn new(n_features: usize) -> Self {
        Self { n_features }
    }
}

impl Predictor for Failing {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict_proba(&self, _x: &FeatureVector) -> Result<[f64; 2], ModelError> {
        Err(ModelError::Backend("backend unavailable".to_string()))
    }
}
