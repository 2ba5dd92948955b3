//! Inference - Predictor capability interface
//!
//! Every fitted classifier family implements `Predictor`. The explanation
//! shape (linear coefficients, ensemble importances, or nothing) is a fixed
//! property of the family and is declared through `Predictor::explain`.

use serde::{Deserialize, Serialize};

use crate::constants::{CLASS_BENIGN, CLASS_MALIGNANT};
use crate::logic::features::FeatureVector;

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Failure inside a fitted model
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("expected {expected} input features, got {actual}")]
    InputLength { expected: usize, actual: usize },

    #[error("malformed model: {0}")]
    Malformed(String),

    #[error("invalid class probabilities {0:?}")]
    InvalidProbabilities([f64; 2]),

    #[error("invalid class label {0}")]
    InvalidLabel(u8),

    /// Failure reported by an externally implemented predictor
    #[error("{0}")]
    Backend(String),
}

// ============================================================================
// EXPLANATION CAPABILITY
// ============================================================================

/// Explanation shape exposed by a predictor family.
///
/// Both vectors are aligned 1:1 with the training-time feature order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Explanation<'a> {
    /// One signed coefficient per feature
    Linear(&'a [f64]),
    /// One non-negative importance per feature (sums to 1)
    ImportanceBased(&'a [f64]),
    /// Family has no explainability capability
    None,
}

impl<'a> Explanation<'a> {
    pub fn kind(&self) -> ExplanationKind {
        match self {
            Explanation::Linear(_) => ExplanationKind::Linear,
            Explanation::ImportanceBased(_) => ExplanationKind::ImportanceBased,
            Explanation::None => ExplanationKind::None,
        }
    }

    /// Per-feature weights, if any
    pub fn weights(&self) -> Option<&'a [f64]> {
        match *self {
            Explanation::Linear(w) | Explanation::ImportanceBased(w) => Some(w),
            Explanation::None => None,
        }
    }
}

/// Data-free tag of `Explanation`, recorded per model at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplanationKind {
    Linear,
    ImportanceBased,
    None,
}

// ============================================================================
// PREDICTOR TRAIT
// ============================================================================

/// Fitted binary classifier.
///
/// Class 0 is malignant, class 1 is benign. Implementations are called
/// concurrently from many requests through a shared reference; a family
/// that is not safe for concurrent reads must serialize internally.
pub trait Predictor: Send + Sync + std::fmt::Debug {
    /// Number of input features the model was fitted on
    fn n_features(&self) -> usize;

    /// `[p(class 0), p(class 1)]`
    fn predict_proba(&self, x: &FeatureVector) -> Result<[f64; 2], ModelError>;

    /// Class label; arg-max of `predict_proba`, ties go to class 0
    fn predict(&self, x: &FeatureVector) -> Result<u8, ModelError> {
        let proba = self.predict_proba(x)?;
        Ok(if proba[CLASS_BENIGN as usize] > proba[CLASS_MALIGNANT as usize] {
            CLASS_BENIGN
        } else {
            CLASS_MALIGNANT
        })
    }

    fn explain(&self) -> Explanation<'_> {
        Explanation::None
    }

    /// Structural checks, run once at registration.
    ///
    /// A predictor that passes must never panic in `predict_proba` on an
    /// input of `n_features` values.
    fn validate(&self) -> Result<(), ModelError> {
        Ok(())
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Reject inputs whose length differs from the fitted feature count
pub(crate) fn check_input(expected: usize, x: &FeatureVector) -> Result<(), ModelError> {
    if x.len() != expected {
        return Err(ModelError::InputLength {
            expected,
            actual: x.len(),
        });
    }
    Ok(())
}

/// Numerically stable logistic function
pub(crate) fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// Weights must be finite and, for importances, non-negative
pub(crate) fn check_weights(weights: &[f64], non_negative: bool) -> Result<(), ModelError> {
    if let Some((i, w)) = weights
        .iter()
        .enumerate()
        .find(|(_, w)| !w.is_finite() || (non_negative && **w < 0.0))
    {
        return Err(ModelError::Malformed(format!("weight {} at index {} is invalid", w, i)));
    }
    Ok(())
}
