//! Pathfinder network algorithms
//!
//! This module provides the generalized shortest-path closure and the
//! assembly of the final network from the closure and the original
//! distances.

pub mod closure;
pub mod network;

pub use closure::{minkowski_combine, PathfinderClosure};
pub use network::{assemble, Edge, PathfinderNetwork};

use crate::graph::DenseMatrix;

/// Result of a closure computation
#[derive(Debug, Clone)]
pub struct ClosureResult {
    /// Closed distance matrix
    pub matrix: DenseMatrix,
    /// Number of nodes that served as relays
    pub relays: usize,
    /// Number of entry updates performed across all relays
    pub improvements: usize,
}

impl ClosureResult {
    /// Create a new closure result
    pub fn new(matrix: DenseMatrix, relays: usize, improvements: usize) -> Self {
        Self {
            matrix,
            relays,
            improvements,
        }
    }

    /// Get the closed distance between two nodes
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.matrix.get(i, j)
    }
}
