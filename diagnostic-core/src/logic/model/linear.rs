//! Logistic regression predictor
//!
//! `p(benign) = sigmoid(w · z + b)` where `z` is the scaled input. The
//! coefficient vector is the model's explanation; a positive coefficient
//! pushes towards class 1 (benign).

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use super::inference::{check_input, check_weights, sigmoid, Explanation, ModelError, Predictor};
use super::scaler::{scaled, StandardScaler};
use crate::logic::features::FeatureVector;

/// Fitted binary logistic regression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    #[serde(default)]
    pub scaler: Option<StandardScaler>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LogisticRegression {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            scaler: None,
            coefficients,
            intercept,
        }
    }

    pub fn with_scaler(mut self, scaler: StandardScaler) -> Self {
        self.scaler = Some(scaler);
        self
    }

    /// Signed distance to the decision boundary (log-odds of class 1)
    pub fn decision_function(&self, x: &FeatureVector) -> Result<f64, ModelError> {
        check_input(self.n_features(), x)?;
        let z = scaled(self.scaler.as_ref(), x.view());
        let w = ArrayView1::from(self.coefficients.as_slice());
        Ok(z.dot(&w) + self.intercept)
    }
}

impl Predictor for LogisticRegression {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict_proba(&self, x: &FeatureVector) -> Result<[f64; 2], ModelError> {
        let p1 = sigmoid(self.decision_function(x)?);
        Ok([1.0 - p1, p1])
    }

    fn explain(&self) -> Explanation<'_> {
        Explanation::Linear(&self.coefficients)
    }

    fn validate(&self) -> Result<(), ModelError> {
        check_weights(&self.coefficients, false)?;
        if !self.intercept.is_finite() {
            return Err(ModelError::Malformed("intercept is not finite".to_string()));
        }
        if let Some(scaler) = &self.scaler {
            scaler.validate(self.coefficients.len())?;
        }
        Ok(())
    }
}
