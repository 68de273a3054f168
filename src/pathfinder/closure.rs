//! Generalized shortest-path closure
//!
//! A Floyd–Warshall pass in which two legs `a` and `b` of a relayed path are
//! combined with the Minkowski function `(a^r + b^r)^(1/r)` instead of plain
//! addition, and only the first `q + 1` nodes are allowed to act as relays.
//!
//! - `r = 1` is ordinary path length; with `q = n - 1` the result is the
//!   exact all-pairs shortest-path matrix.
//! - As `r` grows the combination approaches `max(a, b)`; `r = ∞` uses the
//!   maximum directly.
//! - Infinite entries are absorbing: any path through them stays infinite.

use tracing::debug;

use super::ClosureResult;
use crate::error::Result;
use crate::graph::DenseMatrix;
use crate::types::{validate_exponent, PfnetConfig, DEFAULT_MINKOWSKI_EXPONENT};

/// Combine two path legs with the Minkowski function of order `r`
#[inline]
pub fn minkowski_combine(a: f64, b: f64, r: f64) -> f64 {
    if r == 1.0 {
        a + b
    } else if r.is_infinite() {
        a.max(b)
    } else {
        (a.powf(r) + b.powf(r)).powf(r.recip())
    }
}

/// Generalized Floyd–Warshall closure
#[derive(Debug, Clone)]
pub struct PathfinderClosure {
    /// Largest node index allowed as a relay (`None` = every node)
    pub relay_bound: Option<usize>,
    /// Minkowski exponent `r`
    pub minkowski_exponent: f64,
}

impl Default for PathfinderClosure {
    fn default() -> Self {
        Self {
            relay_bound: None,
            minkowski_exponent: DEFAULT_MINKOWSKI_EXPONENT,
        }
    }
}

impl PathfinderClosure {
    /// Create a closure with every node eligible as relay and `r = 1`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a closure from a config
    pub fn from_config(config: &PfnetConfig) -> Self {
        Self {
            relay_bound: config.relay_bound,
            minkowski_exponent: config.minkowski_exponent,
        }
    }

    /// Set the relay bound `q`
    pub fn with_relay_bound(mut self, relay_bound: usize) -> Self {
        self.relay_bound = Some(relay_bound);
        self
    }

    /// Set the Minkowski exponent `r`
    pub fn with_minkowski_exponent(mut self, exponent: f64) -> Self {
        self.minkowski_exponent = exponent;
        self
    }

    /// Number of relays used for a matrix of dimension `n`
    pub fn relay_count(&self, n: usize) -> usize {
        match self.relay_bound {
            Some(q) => q.saturating_add(1).min(n),
            None => n,
        }
    }

    /// Run the closure on a copy of `distances`
    pub fn run(&self, distances: &DenseMatrix) -> Result<ClosureResult> {
        let mut matrix = distances.clone();
        let improvements = self.run_in_place(&mut matrix)?;
        let relays = self.relay_count(matrix.size());
        Ok(ClosureResult::new(matrix, relays, improvements))
    }

    /// Run the closure in place, returning the number of updated entries
    ///
    /// Entries only ever decrease. Fails if the exponent is below 1 or NaN.
    pub fn run_in_place(&self, matrix: &mut DenseMatrix) -> Result<usize> {
        validate_exponent(self.minkowski_exponent)?;

        let n = matrix.size();
        let r = self.minkowski_exponent;
        let relays = self.relay_count(n);
        let mut relay_row = vec![0.0; n];
        let mut improvements = 0;

        for k in 0..relays {
            // Row k is never written during pass k
            relay_row.copy_from_slice(matrix.row(k));

            for i in 0..n {
                if i == k {
                    continue;
                }
                let to_relay = matrix.get(i, k);
                if to_relay.is_infinite() {
                    continue;
                }

                let row = matrix.row_mut(i);
                for (j, entry) in row.iter_mut().enumerate() {
                    // combine(D[i][k], 0) can round below D[i][k] for r > 1;
                    // skipping j == k keeps the matrix symmetric
                    if j == i || j == k {
                        continue;
                    }
                    let relayed = minkowski_combine(to_relay, relay_row[j], r);
                    if relayed < *entry {
                        *entry = relayed;
                        improvements += 1;
                    }
                }
            }
        }

        debug!(nodes = n, relays, improvements, exponent = r, "closure complete");
        Ok(improvements)
    }
}
