//! Tree ensemble predictors
//!
//! - `RandomForest`: averages normalized leaf class distributions
//! - `GradientBoosting`: sums regression-tree leaves into log-odds
//!
//! Both explain themselves through impurity-based feature importances
//! computed at fit time.

use serde::{Deserialize, Serialize};

use super::inference::{check_input, check_weights, sigmoid, Explanation, ModelError, Predictor};
use super::scaler::{scaled, StandardScaler};
use super::tree::DecisionTree;
use crate::logic::features::FeatureVector;

fn validate_ensemble(
    scaler: Option<&StandardScaler>,
    trees: &[DecisionTree],
    importances: &[f64],
    n_outputs: usize,
) -> Result<(), ModelError> {
    if trees.is_empty() {
        return Err(ModelError::Malformed("ensemble has no trees".to_string()));
    }
    check_weights(importances, true)?;

    let n_features = importances.len();
    if let Some(scaler) = scaler {
        scaler.validate(n_features)?;
    }
    for (i, tree) in trees.iter().enumerate() {
        tree.validate(n_features, n_outputs)
            .map_err(|e| ModelError::Malformed(format!("tree {}: {}", i, e)))?;
    }
    Ok(())
}

// ============================================================================
// RANDOM FOREST
// ============================================================================

/// Bagged classification trees; leaves hold per-class weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    #[serde(default)]
    pub scaler: Option<StandardScaler>,
    pub trees: Vec<DecisionTree>,
    pub feature_importances: Vec<f64>,
}

impl RandomForest {
    pub fn new(trees: Vec<DecisionTree>, feature_importances: Vec<f64>) -> Self {
        Self {
            scaler: None,
            trees,
            feature_importances,
        }
    }

    pub fn with_scaler(mut self, scaler: StandardScaler) -> Self {
        self.scaler = Some(scaler);
        self
    }
}

impl Predictor for RandomForest {
    fn n_features(&self) -> usize {
        self.feature_importances.len()
    }

    fn predict_proba(&self, x: &FeatureVector) -> Result<[f64; 2], ModelError> {
        check_input(self.n_features(), x)?;
        let z = scaled(self.scaler.as_ref(), x.view());

        let mut sum = [0.0f64; 2];
        for tree in &self.trees {
            let leaf = tree.leaf_value(z.view());
            let total = leaf[0] + leaf[1];
            if !(total > 0.0) || leaf[0] < 0.0 || leaf[1] < 0.0 {
                return Err(ModelError::Malformed(format!("leaf weights {:?} are not a distribution", leaf)));
            }
            sum[0] += leaf[0] / total;
            sum[1] += leaf[1] / total;
        }

        let n = self.trees.len() as f64;
        Ok([sum[0] / n, sum[1] / n])
    }

    fn explain(&self) -> Explanation<'_> {
        Explanation::ImportanceBased(&self.feature_importances)
    }

    fn validate(&self) -> Result<(), ModelError> {
        validate_ensemble(self.scaler.as_ref(), &self.trees, &self.feature_importances, 2)
    }
}

// ============================================================================
// GRADIENT BOOSTING
// ============================================================================

/// Boosted regression trees over binomial deviance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientBoosting {
    #[serde(default)]
    pub scaler: Option<StandardScaler>,
    /// Prior log-odds of class 1
    pub init_log_odds: f64,
    pub learning_rate: f64,
    pub trees: Vec<DecisionTree>,
    pub feature_importances: Vec<f64>,
}

impl GradientBoosting {
    pub fn new(
        init_log_odds: f64,
        learning_rate: f64,
        trees: Vec<DecisionTree>,
        feature_importances: Vec<f64>,
    ) -> Self {
        Self {
            scaler: None,
            init_log_odds,
            learning_rate,
            trees,
            feature_importances,
        }
    }

    pub fn with_scaler(mut self, scaler: StandardScaler) -> Self {
        self.scaler = Some(scaler);
        self
    }

    /// Raw log-odds of class 1
    pub fn decision_function(&self, x: &FeatureVector) -> Result<f64, ModelError> {
        check_input(self.n_features(), x)?;
        let z = scaled(self.scaler.as_ref(), x.view());

        let boost: f64 = self.trees.iter().map(|tree| tree.leaf_value(z.view())[0]).sum();
        Ok(self.init_log_odds + self.learning_rate * boost)
    }
}

impl Predictor for GradientBoosting {
    fn n_features(&self) -> usize {
        self.feature_importances.len()
    }

    fn predict_proba(&self, x: &FeatureVector) -> Result<[f64; 2], ModelError> {
        let p1 = sigmoid(self.decision_function(x)?);
        Ok([1.0 - p1, p1])
    }

    fn explain(&self) -> Explanation<'_> {
        Explanation::ImportanceBased(&self.feature_importances)
    }

    fn validate(&self) -> Result<(), ModelError> {
        if !self.init_log_odds.is_finite() || !self.learning_rate.is_finite() {
            return Err(ModelError::Malformed("non-finite boosting parameters".to_string()));
        }
        validate_ensemble(self.scaler.as_ref(), &self.trees, &self.feature_importances, 1)
    }
}

// ============================================================================
// TESTS
// ============================================================================
