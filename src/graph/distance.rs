//! Co-occurrence profiles to distances
//!
//! Two terms are close when their co-occurrence rows point the same way.
//! Distance is the inverted cosine similarity `1 - cos`; terms with no
//! shared profile (cosine exactly zero) are infinitely far apart.

use super::matrix::DenseMatrix;

/// Cosine similarity of two vectors
///
/// Returns 0 when either vector has zero norm instead of dividing by zero.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let norm_a = l2_norm(a);
    let norm_b = l2_norm(b);
    cosine_with_norms(a, b, norm_a, norm_b)
}

/// Convert a similarity to a distance
///
/// Zero similarity maps to `f64::INFINITY`. Rounding overshoot above 1 is
/// clamped so distances are never negative.
pub fn similarity_to_distance(similarity: f64) -> f64 {
    if similarity == 0.0 {
        f64::INFINITY
    } else {
        1.0 - similarity.min(1.0)
    }
}

/// Build the distance matrix from a co-occurrence matrix
///
/// Each unordered pair `i < j` is computed once and written symmetrically;
/// the diagonal is zero.
pub fn distance_matrix(counts: &DenseMatrix) -> DenseMatrix {
    let n = counts.size();
    let norms: Vec<f64> = counts.rows().map(l2_norm).collect();
    let mut distances = DenseMatrix::zeros(n);

    for i in 0..n {
        for j in (i + 1)..n {
            let similarity = cosine_with_norms(counts.row(i), counts.row(j), norms[i], norms[j]);
            distances.set_symmetric(i, j, similarity_to_distance(similarity));
        }
    }

    distances
}

fn cosine_with_norms(a: &[f64], b: &[f64], norm_a: f64, norm_b: f64) -> f64 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot(a, b) / (norm_a * norm_b)
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn l2_norm(v: &[f64]) -> f64 {
    dot(v, v).sqrt()
}
