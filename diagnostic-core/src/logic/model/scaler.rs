//! Standard scaling stage shared by all fitted pipelines

use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use super::inference::ModelError;

/// `(x - mean) / scale`, fitted on the training split.
/// A zero scale is treated as 1 (constant training column).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Self {
        Self { mean, scale }
    }

    pub fn validate(&self, n_features: usize) -> Result<(), ModelError> {
        if self.mean.len() != n_features || self.scale.len() != n_features {
            return Err(ModelError::Malformed(format!(
                "scaler has {}/{} mean/scale entries, model has {} features",
                self.mean.len(),
                self.scale.len(),
                n_features
            )));
        }
        if self.mean.iter().chain(&self.scale).any(|v| !v.is_finite()) {
            return Err(ModelError::Malformed("scaler contains non-finite values".to_string()));
        }
        Ok(())
    }

    pub fn transform(&self, x: ArrayView1<'_, f64>) -> Array1<f64> {
        x.iter()
            .zip(&self.mean)
            .zip(&self.scale)
            .map(|((v, mean), scale)| {
                let scale = if *scale == 0.0 { 1.0 } else { *scale };
                (v - mean) / scale
            })
            .collect()
    }
}

/// Apply an optional scaler, copying the input when there is none
pub(crate) fn scaled(scaler: Option<&StandardScaler>, x: ArrayView1<'_, f64>) -> Array1<f64> {
    match scaler {
        Some(scaler) => scaler.transform(x),
        None => x.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_transform() {
        let scaler = StandardScaler::new(vec![10.0, 0.0], vec![2.0, 0.5]);
        let z = scaler.transform(array![14.0, -1.0].view());
        assert_eq!(z, array![2.0, -2.0]);
    }

    #[test]
    fn test_zero_scale_treated_as_one() {
        let scaler = StandardScaler::new(vec![3.0], vec![0.0]);
        let z = scaler.transform(array![5.0].view());
        assert_eq!(z, array![2.0]);
    }

    #[test]
    fn test_validate_length() {
        let scaler = StandardScaler::new(vec![0.0, 0.0], vec![1.0]);
        assert!(matches!(scaler.validate(2), Err(ModelError::Malformed(_))));
        let scaler = StandardScaler::new(vec![0.0, 0.0], vec![1.0, 1.0]);
        assert!(scaler.validate(2).is_ok());
        assert!(scaler.validate(3).is_err());
    }

    #[test]
    fn test_no_scaler_copies_input() {
        let x = array![1.5, -2.5];
        assert_eq!(scaled(None, x.view()), x);
    }
}
