//! Dense square matrix representation
//!
//! Every stage of the pipeline (co-occurrence counts, distances, closure,
//! final network) works on a full `n × n` matrix. Values are stored in one
//! contiguous row-major buffer indexed by `i * n + j`, which keeps the
//! closure's inner loop a straight walk over memory.

use std::ops::{Index, IndexMut};

use crate::error::{PfnetError, Result};

/// An owned `n × n` matrix of `f64` values
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DenseMatrix {
    /// Number of rows (and columns)
    size: usize,
    /// Row-major values, `size * size` entries
    values: Vec<f64>,
}

impl DenseMatrix {
    /// Create a matrix filled with zeros
    pub fn zeros(size: usize) -> Self {
        Self::filled(size, 0.0)
    }

    /// Create a matrix with every entry set to `value`
    pub fn filled(size: usize, value: f64) -> Self {
        Self {
            size,
            values: vec![value; size * size],
        }
    }

    /// Build a matrix from nested rows
    ///
    /// Fails with [`PfnetError::NotSquare`] if any row length differs from
    /// the number of rows.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        let mut values = Vec::with_capacity(size * size);

        for (row, entries) in rows.iter().enumerate() {
            let entries = entries.as_ref();
            if entries.len() != size {
                return Err(PfnetError::NotSquare {
                    row,
                    len: entries.len(),
                    expected: size,
                });
            }
            values.extend_from_slice(entries);
        }

        Ok(Self { size, values })
    }

    /// Number of rows (equivalently, columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if the matrix has no rows
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Get the value at `(i, j)`
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    /// Set the value at `(i, j)`
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.values[i * self.size + j] = value;
    }

    /// Set both `(i, j)` and `(j, i)`
    #[inline]
    pub fn set_symmetric(&mut self, i: usize, j: usize, value: f64) {
        self.set(i, j, value);
        self.set(j, i, value);
    }

    /// Borrow row `i`
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.size;
        &self.values[start..start + self.size]
    }

    /// Mutably borrow row `i`
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        let start = i * self.size;
        &mut self.values[start..start + self.size]
    }

    /// Iterate over rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // chunks_exact panics on a zero chunk size
        self.values.chunks_exact(self.size.max(1))
    }

    /// Flat row-major view of all values
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Copy into nested rows
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    /// Check `m[i][j] == m[j][i]` for every pair
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| ((i + 1)..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Count the off-diagonal entries with a finite value, each pair once
    pub fn finite_pairs(&self) -> usize {
        self.count_pairs(f64::is_finite)
    }

    /// Count the off-diagonal entries that are not zero, each pair once
    pub fn nonzero_pairs(&self) -> usize {
        self.count_pairs(|v| v != 0.0)
    }

    fn count_pairs(&self, keep: impl Fn(f64) -> bool) -> usize {
        (0..self.size)
            .map(|i| {
                self.row(i)[i + 1..]
                    .iter()
                    .filter(|&&v| keep(v))
                    .count()
            })
            .sum()
    }
}

impl Index<(usize, usize)> for DenseMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.values[i * self.size + j]
    }
}

impl IndexMut<(usize, usize)> for DenseMatrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.values[i * self.size + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let m = DenseMatrix::zeros(3);
        assert_eq!(m.size(), 3);
        assert_eq!(m.as_slice().len(), 9);
        assert!(m.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_from_rows() {
        let m = DenseMatrix::from_rows(&[vec![0.0, 1.0], vec![2.0, 3.0]]).unwrap();
        assert_eq!(m.get(0, 1), 1.0);
        assert_eq!(m[(1, 0)], 2.0);
        assert_eq!(m.row(1), &[2.0, 3.0]);
        assert_eq!(m.to_rows(), vec![vec![0.0, 1.0], vec![2.0, 3.0]]);
    }

    #[test]
    fn test_from_rows_not_square() {
        let err = DenseMatrix::from_rows(&[vec![0.0, 1.0], vec![2.0]]).unwrap_err();
        assert!(matches!(
            err,
            PfnetError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            }
        ));
    }

    #[test]
    fn test_set_symmetric() {
        let mut m = DenseMatrix::zeros(3);
        m.set_symmetric(0, 2, 4.5);
        assert_eq!(m.get(0, 2), 4.5);
        assert_eq!(m.get(2, 0), 4.5);
        assert!(m.is_symmetric());

        m[(1, 2)] = 1.0;
        assert!(!m.is_symmetric());
    }

    #[test]
    fn test_empty_matrix() {
        let m = DenseMatrix::zeros(0);
        assert!(m.is_empty());
        assert_eq!(m.rows().count(), 0);
        assert!(m.to_rows().is_empty());
        assert!(m.is_symmetric());
    }

    #[test]
    fn test_finite_pairs() {
        let inf = f64::INFINITY;
        let m = DenseMatrix::from_rows(&[
            vec![0.0, 1.0, inf],
            vec![1.0, 0.0, 2.0],
            vec![inf, 2.0, 0.0],
        ])
        .unwrap();
        assert_eq!(m.finite_pairs(), 2);
    }

    #[test]
    fn test_nonzero_pairs() {
        let m = DenseMatrix::from_rows(&[
            vec![0.0, 2.0, 0.0],
            vec![2.0, 0.0, 1.0],
            vec![0.0, 1.0, 0.0],
        ])
        .unwrap();
        assert_eq!(m.nonzero_pairs(), 2);
        assert_eq!(DenseMatrix::zeros(0).nonzero_pairs(), 0);
        assert_eq!(DenseMatrix::filled(3, 5.0).nonzero_pairs(), 3);
    }
}
