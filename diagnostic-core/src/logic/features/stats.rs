//! Feature Statistics - precomputed per-feature summary
//!
//! Computed once over the training dataset. Used for mean imputation and
//! handed verbatim to UI clients for slider ranges.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Summary of one feature column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureStat {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std: f64,
}

impl FeatureStat {
    pub fn new(min: f64, max: f64, mean: f64, std: f64) -> Self {
        Self { min, max, mean, std }
    }
}

/// Feature name -> statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureStats {
    entries: BTreeMap<String, FeatureStat>,
}

impl FeatureStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, stat: FeatureStat) {
        self.entries.insert(name.into(), stat);
    }

    pub fn get(&self, name: &str) -> Option<&FeatureStat> {
        self.entries.get(name)
    }

    /// Imputation default for a feature
    pub fn mean(&self, name: &str) -> Option<f64> {
        self.get(name).map(|s| s.mean)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureStat)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<S: Into<String>> FromIterator<(S, FeatureStat)> for FeatureStats {
    fn from_iter<I: IntoIterator<Item = (S, FeatureStat)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_lookup() {
        let stats: FeatureStats = [("mean radius", FeatureStat::new(6.98, 28.11, 14.13, 3.52))]
            .into_iter()
            .collect();

        assert_eq!(stats.mean("mean radius"), Some(14.13));
        assert_eq!(stats.mean("worst area"), None);
    }

    #[test]
    fn test_deserialize_from_stats_table() {
        let json = r#"{
            "mean radius": {"min": 6.981, "max": 28.11, "mean": 14.127, "std": 3.521}
        }"#;
        let stats: FeatureStats = serde_json::from_str(json).unwrap();

        assert_eq!(stats.len(), 1);
        let stat = stats.get("mean radius").unwrap();
        assert_eq!(stat.min, 6.981);
        assert_eq!(stat.std, 3.521);
    }
}
