//! Sliding-window co-occurrence counting
//!
//! Every token is paired with the tokens that follow it within the window;
//! each pair of distinct terms increments a symmetric count. The window
//! truncates at the end of the sequence and never wraps around.

use super::matrix::DenseMatrix;
use super::vocabulary::Vocabulary;
use crate::types::{PfnetConfig, DEFAULT_WINDOW};

/// Builds a symmetric co-occurrence matrix from a term-id sequence
#[derive(Debug, Clone, Copy)]
pub struct CooccurrenceBuilder {
    /// Number of following tokens paired with each token
    window: usize,
}

impl Default for CooccurrenceBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl CooccurrenceBuilder {
    /// Create a builder with the given window width
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    /// Create a builder using the window from a config
    pub fn from_config(config: &PfnetConfig) -> Self {
        Self::new(config.window)
    }

    /// Window width
    pub fn window(&self) -> usize {
        self.window
    }

    /// Count co-occurrences in `sequence` over a vocabulary of `size` terms
    pub fn build(&self, sequence: &[u32], size: usize) -> DenseMatrix {
        let mut counts = DenseMatrix::zeros(size);

        for (i, &term_i) in sequence.iter().enumerate() {
            let end = sequence.len().min(i.saturating_add(1).saturating_add(self.window));
            for &term_j in &sequence[i + 1..end] {
                increment_edge(&mut counts, term_i as usize, term_j as usize, 1.0);
            }
        }

        counts
    }

    /// Encode `tokens` with `vocabulary` and count co-occurrences
    pub fn build_from_tokens<S: AsRef<str>>(
        &self,
        tokens: &[S],
        vocabulary: &Vocabulary,
    ) -> DenseMatrix {
        self.build(&vocabulary.encode(tokens), vocabulary.len())
    }
}

/// Add `weight` to the edge in both directions; self-loops are ignored
fn increment_edge(counts: &mut DenseMatrix, from: usize, to: usize, weight: f64) {
    if from == to {
        return;
    }
    counts[(from, to)] += weight;
    counts[(to, from)] += weight;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cooccurrence(tokens: &[&str], window: usize) -> (Vocabulary, DenseMatrix) {
        let vocab = Vocabulary::from_tokens(tokens);
        let counts = CooccurrenceBuilder::new(window).build_from_tokens(tokens, &vocab);
        (vocab, counts)
    }

    #[test]
    fn test_repeated_pair() {
        let (vocab, counts) = cooccurrence(&["a", "b", "a"], 5);

        assert_eq!(vocab.len(), 2);
        // (0,1) a-b and (1,2) b-a count; (0,2) a-a is a self pair
        assert_eq!(counts.to_rows(), vec![vec![0.0, 2.0], vec![2.0, 0.0]]);
    }

    #[test]
    fn test_symmetric_zero_diagonal() {
        let tokens = ["the", "cat", "sat", "on", "the", "mat", "the", "cat", "ran"];
        let (vocab, counts) = cooccurrence(&tokens, 3);

        assert!(counts.is_symmetric());
        for i in 0..vocab.len() {
            assert_eq!(counts.get(i, i), 0.0);
        }
    }

    #[test]
    fn test_window_limits_reach() {
        let (vocab, counts) = cooccurrence(&["a", "b", "c", "d"], 1);
        let a = vocab.get_id("a").unwrap() as usize;
        let b = vocab.get_id("b").unwrap() as usize;
        let c = vocab.get_id("c").unwrap() as usize;

        assert_eq!(counts.get(a, b), 1.0);
        assert_eq!(counts.get(a, c), 0.0);
    }

    #[test]
    fn test_window_truncates_at_end() {
        // With a window larger than the sequence every pair is counted once
        let (_, counts) = cooccurrence(&["a", "b", "c"], 10);
        assert_eq!(
            counts.to_rows(),
            vec![
                vec![0.0, 1.0, 1.0],
                vec![1.0, 0.0, 1.0],
                vec![1.0, 1.0, 0.0],
            ]
        );
    }

    #[test]
    fn test_window_usize_max() {
        let (_, counts) = cooccurrence(&["a", "b", "c"], usize::MAX);
        assert_eq!(counts, cooccurrence(&["a", "b", "c"], 10).1);
    }

    #[test]
    fn test_default_window_is_five() {
        // "a" at 0 reaches positions 1..=5, not 6
        let tokens = ["a", "x1", "x2", "x3", "x4", "b", "c"];
        let (vocab, counts) = cooccurrence(&tokens, DEFAULT_WINDOW);
        let a = vocab.get_id("a").unwrap() as usize;
        let b = vocab.get_id("b").unwrap() as usize;
        let c = vocab.get_id("c").unwrap() as usize;

        assert_eq!(counts.get(a, b), 1.0);
        assert_eq!(counts.get(a, c), 0.0);
    }

    #[test]
    fn test_empty_sequence() {
        let (vocab, counts) = cooccurrence(&[], 5);
        assert!(vocab.is_empty());
        assert!(counts.is_empty());
    }

    #[test]
    fn test_self_loops_prevented() {
        let mut counts = DenseMatrix::zeros(2);
        increment_edge(&mut counts, 1, 1, 1.0);
        assert_eq!(counts.get(1, 1), 0.0);
    }
}
