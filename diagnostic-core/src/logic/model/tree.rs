//! Decision tree storage and traversal.
//!
//! Structure-of-arrays layout: node `i` is described by index `i` of every
//! array. Leaves have `children_left[i] == TREE_LEAF`. A sample goes left
//! when `x[feature[i]] <= threshold[i]`.
//!
//! ```text
//!            node 0: x[1] <= 0.5
//!            /                 \
//!     node 1 (leaf)       node 2 (leaf)
//! ```

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use super::inference::ModelError;

/// Child index marking a leaf
pub const TREE_LEAF: i64 = -1;

/// One fitted tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    /// Split feature per node; ignored for leaves
    pub feature: Vec<i64>,
    /// Split threshold per node; ignored for leaves
    pub threshold: Vec<f64>,
    /// Node outputs: class weights for classification trees, a single
    /// value for regression trees
    pub value: Vec<Vec<f64>>,
}

impl DecisionTree {
    /// Single-leaf tree
    pub fn leaf(value: Vec<f64>) -> Self {
        Self {
            children_left: vec![TREE_LEAF],
            children_right: vec![TREE_LEAF],
            feature: vec![TREE_LEAF],
            threshold: vec![0.0],
            value: vec![value],
        }
    }

    /// Depth-one tree splitting on `feature <= threshold`
    pub fn stump(feature: usize, threshold: f64, left: Vec<f64>, right: Vec<f64>) -> Self {
        Self {
            children_left: vec![1, TREE_LEAF, TREE_LEAF],
            children_right: vec![2, TREE_LEAF, TREE_LEAF],
            feature: vec![feature as i64, TREE_LEAF, TREE_LEAF],
            threshold: vec![threshold, 0.0, 0.0],
            value: vec![vec![0.0; left.len()], left, right],
        }
    }

    pub fn n_nodes(&self) -> usize {
        self.children_left.len()
    }

    pub fn is_leaf(&self, node: usize) -> bool {
        self.children_left[node] == TREE_LEAF
    }

    /// Check array lengths, child links and split features.
    ///
    /// Children must have a larger index than their parent, which rules
    /// out cycles and guarantees traversal terminates.
    pub fn validate(&self, n_features: usize, n_outputs: usize) -> Result<(), ModelError> {
        let n = self.n_nodes();
        if n == 0 {
            return Err(ModelError::Malformed("tree has no nodes".to_string()));
        }
        if self.children_right.len() != n
            || self.feature.len() != n
            || self.threshold.len() != n
            || self.value.len() != n
        {
            return Err(ModelError::Malformed("tree node arrays differ in length".to_string()));
        }

        for node in 0..n {
            if self.value[node].len() != n_outputs {
                return Err(ModelError::Malformed(format!(
                    "node {} has {} outputs, expected {}",
                    node,
                    self.value[node].len(),
                    n_outputs
                )));
            }
            if self.is_leaf(node) {
                continue;
            }

            for child in [self.children_left[node], self.children_right[node]] {
                if child <= node as i64 || child >= n as i64 {
                    return Err(ModelError::Malformed(format!(
                        "node {} has invalid child {}",
                        node, child
                    )));
                }
            }
            let feature = self.feature[node];
            if feature < 0 || feature >= n_features as i64 {
                return Err(ModelError::Malformed(format!(
                    "node {} splits on feature {} of {}",
                    node, feature, n_features
                )));
            }
            if self.threshold[node].is_nan() {
                return Err(ModelError::Malformed(format!("node {} has NaN threshold", node)));
            }
        }

        Ok(())
    }

    /// Index of the leaf reached by `x`. Requires a validated tree.
    pub fn leaf_index(&self, x: ArrayView1<'_, f64>) -> usize {
        let mut node = 0usize;
        while !self.is_leaf(node) {
            let value = x[self.feature[node] as usize];
            node = if value <= self.threshold[node] {
                self.children_left[node] as usize
            } else {
                self.children_right[node] as usize
            };
        }
        node
    }

    /// Output of the leaf reached by `x`
    pub fn leaf_value(&self, x: ArrayView1<'_, f64>) -> &[f64] {
        &self.value[self.leaf_index(x)]
    }
}
