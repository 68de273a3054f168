//! Network assembly
//!
//! The final matrix takes the closure value for each pair unless the
//! original distance is strictly smaller. Since the closure never increases
//! an entry this leaves the closure unchanged for well-formed input; the
//! comparison is kept so the output is always bounded by both matrices.

use serde::Serialize;

use super::closure::PathfinderClosure;
use crate::error::Result;
use crate::graph::DenseMatrix;
use crate::types::PfnetConfig;

/// Combine the original distances with their closure
///
/// Both matrices must have the same dimension.
pub fn assemble(original: &DenseMatrix, mut closure: DenseMatrix) -> DenseMatrix {
    debug_assert_eq!(original.size(), closure.size());

    for (i, row) in original.rows().enumerate() {
        for (j, &direct) in row.iter().enumerate() {
            if direct < closure.get(i, j) {
                closure.set(i, j, direct);
            }
        }
    }

    closure
}

/// An undirected link of the network, reported once with `source < target`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub source: u32,
    pub target: u32,
    pub weight: f64,
}

/// A computed Pathfinder network
#[derive(Debug, Clone)]
pub struct PathfinderNetwork {
    /// Distance matrix the network was built from
    original: DenseMatrix,
    /// Final matrix
    matrix: DenseMatrix,
    /// Number of relays the closure used
    relays: usize,
    /// Number of closure updates
    improvements: usize,
}

impl PathfinderNetwork {
    /// Run the closure on `distances` and assemble the final matrix
    pub fn build(distances: DenseMatrix, config: &PfnetConfig) -> Result<Self> {
        Self::build_with(distances, &PathfinderClosure::from_config(config))
    }

    /// Same as [`build`](Self::build) with an explicit closure
    pub fn build_with(distances: DenseMatrix, closure: &PathfinderClosure) -> Result<Self> {
        let closed = closure.run(&distances)?;
        let matrix = assemble(&distances, closed.matrix);

        Ok(Self {
            original: distances,
            matrix,
            relays: closed.relays,
            improvements: closed.improvements,
        })
    }

    /// Final matrix
    pub fn matrix(&self) -> &DenseMatrix {
        &self.matrix
    }

    /// Consume the network, returning the final matrix
    pub fn into_matrix(self) -> DenseMatrix {
        self.matrix
    }

    /// Distance matrix the network was built from
    pub fn original(&self) -> &DenseMatrix {
        &self.original
    }

    /// Number of nodes
    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    /// Number of relays the closure used
    pub fn relays(&self) -> usize {
        self.relays
    }

    /// Number of entries the closure shortened
    pub fn improvements(&self) -> usize {
        self.improvements
    }

    /// Direct links whose distance equals their final distance
    ///
    /// These are the pairs for which no relayed path is shorter than the
    /// direct one. Infinite and diagonal entries are never links. This is a
    /// reporting view; the final matrix itself is not pruned.
    pub fn links(&self) -> Vec<Edge> {
        let n = self.size();
        let mut links = Vec::new();

        for i in 0..n {
            for j in (i + 1)..n {
                let direct = self.original.get(i, j);
                if direct.is_finite() && direct == self.matrix.get(i, j) {
                    links.push(Edge {
                        source: i as u32,
                        target: j as u32,
                        weight: direct,
                    });
                }
            }
        }

        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: f64 = f64::INFINITY;

    fn triangle() -> DenseMatrix {
        DenseMatrix::from_rows(&[
            vec![0.0, 1.0, 4.0],
            vec![1.0, 0.0, 2.0],
            vec![4.0, 2.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_assemble_keeps_closure_when_smaller() {
        let original = triangle();
        let closure = DenseMatrix::from_rows(&[
            vec![0.0, 1.0, 3.0],
            vec![1.0, 0.0, 2.0],
            vec![3.0, 2.0, 0.0],
        ])
        .unwrap();

        let assembled = assemble(&original, closure.clone());
        assert_eq!(assembled, closure);
    }

    #[test]
    fn test_assemble_restores_smaller_original() {
        let original = triangle();
        let mut larger = triangle();
        larger.set(0, 1, 7.0);

        let assembled = assemble(&original, larger);
        assert_eq!(assembled.get(0, 1), 1.0);
    }

    #[test]
    fn test_build_equals_closure() {
        let config = PfnetConfig::default();
        let network = PathfinderNetwork::build(triangle(), &config).unwrap();
        let closed = PathfinderClosure::from_config(&config)
            .run(&triangle())
            .unwrap();

        assert_eq!(network.matrix(), &closed.matrix);
        assert_eq!(network.original(), &triangle());
        assert_eq!(network.relays(), 3);
        assert_eq!(network.improvements(), 2);
    }

    #[test]
    fn test_links_exclude_relayed_pairs() {
        let network = PathfinderNetwork::build(triangle(), &PfnetConfig::default()).unwrap();
        let links = network.links();

        assert_eq!(
            links,
            vec![
                Edge {
                    source: 0,
                    target: 1,
                    weight: 1.0
                },
                Edge {
                    source: 1,
                    target: 2,
                    weight: 2.0
                },
            ]
        );
    }

    #[test]
    fn test_links_skip_infinite() {
        let distances = DenseMatrix::from_rows(&[vec![0.0, INF], vec![INF, 0.0]]).unwrap();
        let network = PathfinderNetwork::build(distances, &PfnetConfig::default()).unwrap();

        assert!(network.links().is_empty());
        assert!(network.matrix().get(0, 1).is_infinite());
    }

    #[test]
    fn test_into_matrix() {
        let network = PathfinderNetwork::build(triangle(), &PfnetConfig::default()).unwrap();
        let matrix = network.into_matrix();
        assert_eq!(matrix.get(0, 2), 3.0);
    }
}
