//! Pipeline artifacts.
//!
//! Intermediate matrices are handed by value from stage to stage and dropped
//! once consumed; observers see each one by reference at its stage boundary.
//! [`PfnetOutput`] is what survives a run: the vocabulary that names the rows
//! and the assembled network.

use crate::graph::{DenseMatrix, Vocabulary};
use crate::pathfinder::{Edge, PathfinderNetwork};

/// Result of a full pipeline run
#[derive(Debug, Clone)]
pub struct PfnetOutput {
    /// Row/column labels of the matrices
    pub vocabulary: Vocabulary,
    /// Assembled network
    pub network: PathfinderNetwork,
}

impl PfnetOutput {
    /// Final matrix
    pub fn matrix(&self) -> &DenseMatrix {
        self.network.matrix()
    }

    /// Links of the network
    pub fn links(&self) -> Vec<Edge> {
        self.network.links()
    }

    /// Final distance between two terms, if both are in the vocabulary
    pub fn distance_between(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.vocabulary.get_id(a)? as usize;
        let j = self.vocabulary.get_id(b)? as usize;
        Some(self.matrix().get(i, j))
    }

    /// Number of terms
    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Check if the input produced no terms
    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }
}
