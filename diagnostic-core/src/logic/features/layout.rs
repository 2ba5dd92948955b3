//! Feature Layout - Ordered feature schema
//!
//! **This type controls vector positions.**
//!
//! Position `i` of every feature vector, coefficient array and importance
//! array corresponds to `schema.name(i)`. The order is the training-time
//! column order and must never be re-sorted.

use std::collections::HashSet;
use std::sync::Arc;

use crc32fast::Hasher;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::CoreError;

// ============================================================================
// FEATURE SCHEMA
// ============================================================================

/// Ordered, duplicate-free list of feature names.
///
/// Cheap to clone; all clones share the same name list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    names: Arc<[String]>,
}

impl Serialize for FeatureSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.names.iter())
    }
}

impl FeatureSchema {
    /// Create a schema, rejecting duplicate names
    pub fn new<I, S>(names: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(CoreError::DuplicateFeature(name.clone()));
            }
        }

        Ok(Self { names: names.into() })
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Feature names in vector order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.names.iter()
    }

    /// Get feature index by name (O(n), schemas are small)
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Get feature name by index
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// CRC32 over the ordered names.
    /// Two schemas with the same names in a different order hash differently.
    pub fn layout_hash(&self) -> u32 {
        let mut hasher = Hasher::new();
        for name in self.names.iter() {
            hasher.update(name.as_bytes());
            hasher.update(&[0]); // Separator
        }
        hasher.finalize()
    }
}

impl<'a> IntoIterator for &'a FeatureSchema {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Layout summary for logging and the metadata endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
}

impl LayoutInfo {
    pub fn of(schema: &FeatureSchema) -> Self {
        Self {
            hash: schema.layout_hash(),
            feature_count: schema.len(),
            feature_names: schema.names().to_vec(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
