//! Prediction output shape shared by every model

use serde::{Deserialize, Serialize};

use crate::constants::{CLASS_BENIGN, CLASS_MALIGNANT, PROBABILITY_TOLERANCE};
use crate::logic::explain::FeatureImportance;
use crate::logic::model::ModelError;

/// Class probabilities under fixed semantic labels.
///
/// Contract: probability index 0 is malignant, index 1 is benign, matching
/// the dataset's target encoding (0 = malignant, 1 = benign).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassProbabilities {
    pub benign: f64,
    pub malignant: f64,
}

impl ClassProbabilities {
    /// Label a `[p(class 0), p(class 1)]` pair
    pub fn from_proba(proba: [f64; 2]) -> Self {
        Self {
            malignant: proba[CLASS_MALIGNANT as usize],
            benign: proba[CLASS_BENIGN as usize],
        }
    }
}

/// One model's answer for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// 0 = malignant, 1 = benign
    pub prediction: u8,
    pub probabilities: ClassProbabilities,
    /// `None` (JSON null) for families without an explanation capability
    pub feature_importance: Option<FeatureImportance>,
}

/// Probabilities must be finite, within [0, 1], and sum to 1
pub(crate) fn check_probabilities(proba: [f64; 2]) -> Result<(), ModelError> {
    let in_range = proba.iter().all(|p| p.is_finite() && (0.0..=1.0).contains(p));
    if !in_range || (proba[0] + proba[1] - 1.0).abs() > PROBABILITY_TOLERANCE {
        return Err(ModelError::InvalidProbabilities(proba));
    }
    Ok(())
}

/// Labels other than 0 and 1 are a predictor defect
pub(crate) fn check_label(label: u8) -> Result<u8, ModelError> {
    match label {
        CLASS_MALIGNANT | CLASS_BENIGN => Ok(label),
        other => Err(ModelError::InvalidLabel(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_zero_is_malignant() {
        let probabilities = ClassProbabilities::from_proba([0.8, 0.2]);
        assert_eq!(probabilities.malignant, 0.8);
        assert_eq!(probabilities.benign, 0.2);
    }

    #[test]
    fn test_check_probabilities() {
        assert!(check_probabilities([0.3, 0.7]).is_ok());
        assert!(check_probabilities([1.0, 0.0]).is_ok());
        assert!(check_probabilities([0.3, 0.6]).is_err());
        assert!(check_probabilities([1.5, -0.5]).is_err());
        assert!(check_probabilities([f64::NAN, 0.5]).is_err());
    }

    #[test]
    fn test_check_label() {
        assert_eq!(check_label(0), Ok(0));
        assert_eq!(check_label(1), Ok(1));
        assert_eq!(check_label(2), Err(ModelError::InvalidLabel(2)));
    }

    #[test]
    fn test_absent_importance_serializes_as_null() {
        let result = PredictionResult {
            prediction: 1,
            probabilities: ClassProbabilities::from_proba([0.25, 0.75]),
            feature_importance: None,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "prediction": 1,
                "probabilities": {"benign": 0.75, "malignant": 0.25},
                "feature_importance": null
            })
        );
    }
}
