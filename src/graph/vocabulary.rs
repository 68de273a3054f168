//! Sorted vocabulary with stable term ids
//!
//! Distinct tokens are sorted lexicographically and each one is assigned its
//! rank as id, so ids form the contiguous range `[0, n)` and the mapping is
//! deterministic for a given set of tokens regardless of input order.

use rustc_hash::FxHashMap;

/// An indexed, sorted set of distinct terms
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Terms in ascending order; position = term id
    terms: Vec<String>,
    /// Maps term -> id
    term_to_id: FxHashMap<String, u32>,
}

impl Vocabulary {
    /// Build a vocabulary from a token sequence
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut terms: Vec<String> = tokens.iter().map(|t| t.as_ref().to_string()).collect();
        terms.sort_unstable();
        terms.dedup();

        let mut term_to_id =
            FxHashMap::with_capacity_and_hasher(terms.len(), Default::default());
        for (id, term) in terms.iter().enumerate() {
            term_to_id.insert(term.clone(), id as u32);
        }

        Self { terms, term_to_id }
    }

    /// Map a token sequence to term ids
    ///
    /// Tokens that are not in the vocabulary are skipped; for the sequence the
    /// vocabulary was built from, the output has the same length as the input.
    pub fn encode<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<u32> {
        tokens
            .iter()
            .filter_map(|t| self.get_id(t.as_ref()))
            .collect()
    }

    /// Get the id of a term
    pub fn get_id(&self, term: &str) -> Option<u32> {
        self.term_to_id.get(term).copied()
    }

    /// Get the term for an id
    pub fn term(&self, id: u32) -> Option<&str> {
        self.terms.get(id as usize).map(String::as_str)
    }

    /// All terms in id order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Iterate over `(id, term)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.terms
            .iter()
            .enumerate()
            .map(|(i, t)| (i as u32, t.as_str()))
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_ids() {
        let vocab = Vocabulary::from_tokens(&["pear", "apple", "fig", "apple"]);

        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.terms(), &["apple", "fig", "pear"]);
        assert_eq!(vocab.get_id("apple"), Some(0));
        assert_eq!(vocab.get_id("fig"), Some(1));
        assert_eq!(vocab.get_id("pear"), Some(2));
        assert_eq!(vocab.get_id("kiwi"), None);
    }

    #[test]
    fn test_order_independent() {
        let a = Vocabulary::from_tokens(&["b", "a", "c"]);
        let b = Vocabulary::from_tokens(&["c", "b", "a", "a"]);
        assert_eq!(a.terms(), b.terms());
    }

    #[test]
    fn test_encode() {
        let tokens = ["a", "b", "a"];
        let vocab = Vocabulary::from_tokens(&tokens);
        assert_eq!(vocab.encode(&tokens), vec![0, 1, 0]);
    }

    #[test]
    fn test_byte_order_is_case_sensitive() {
        // Uppercase sorts before lowercase
        let vocab = Vocabulary::from_tokens(&["word", "Word"]);
        assert_eq!(vocab.term(0), Some("Word"));
        assert_eq!(vocab.term(1), Some("word"));
    }

    #[test]
    fn test_empty() {
        let vocab = Vocabulary::from_tokens::<&str>(&[]);
        assert!(vocab.is_empty());
        assert_eq!(vocab.iter().count(), 0);
        assert_eq!(vocab.term(0), None);
    }
}
