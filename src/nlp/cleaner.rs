//! Token cleaning
//!
//! Prepares raw text tokens for co-occurrence analysis:
//! 1. Drop tokens whose lowercase form is a stopword
//! 2. Strip every non-alphabetic character (digits and symbols included)
//! 3. Drop tokens left empty, lowercase the rest
//! 4. Keep at most `limit` tokens
//!
//! The stopword check runs on the raw token, before symbols are stripped.

use super::stopwords::StopwordFilter;

/// Stopword and symbol removal for token streams
#[derive(Debug, Clone, Default)]
pub struct TextCleaner {
    stopwords: StopwordFilter,
    /// Maximum number of tokens kept (`None` = unlimited)
    limit: Option<usize>,
}

impl TextCleaner {
    /// Create a cleaner with English stopwords and no limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different stopword filter
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Truncate the cleaned stream to at most `limit` tokens
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Clean a single token, returning `None` if it should be dropped
    pub fn clean_token(&self, token: &str) -> Option<String> {
        if self.stopwords.is_stopword(token) {
            return None;
        }

        let cleaned: String = token
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_lowercase)
            .collect();

        (!cleaned.is_empty()).then_some(cleaned)
    }

    /// Clean a token stream
    pub fn clean<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .filter_map(|t| self.clean_token(t.as_ref()))
            .take(self.limit.unwrap_or(usize::MAX))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_stopwords() {
        let cleaner = TextCleaner::new();
        let cleaned = cleaner.clean(&["The", "network", "and", "the", "graph"]);
        assert_eq!(cleaned, vec!["network", "graph"]);
    }

    #[test]
    fn test_strips_symbols_and_digits() {
        let cleaner = TextCleaner::new();
        let cleaned = cleaner.clean(&["Graph,", "x2y", "42", "--", "node's"]);
        assert_eq!(cleaned, vec!["graph", "xy", "nodes"]);
    }

    #[test]
    fn test_stopword_check_precedes_stripping() {
        // "the," is not itself a stopword, so it survives as "the"
        let cleaner = TextCleaner::new();
        assert_eq!(cleaner.clean_token("the,"), Some("the".to_string()));
        assert_eq!(cleaner.clean_token("the"), None);
    }

    #[test]
    fn test_limit() {
        let cleaner = TextCleaner::new().with_limit(2);
        let cleaned = cleaner.clean(&["alpha", "the", "beta", "gamma"]);
        assert_eq!(cleaned, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_limit_zero() {
        let cleaner = TextCleaner::new().with_limit(0);
        assert!(cleaner.clean(&["alpha"]).is_empty());
    }

    #[test]
    fn test_custom_stopwords() {
        let cleaner = TextCleaner::new().with_stopwords(StopwordFilter::from_list(&["alpha"]));
        assert_eq!(cleaner.clean(&["alpha", "the"]), vec!["the"]);
    }

    #[test]
    fn test_unicode_letters_kept() {
        let cleaner = TextCleaner::new().with_stopwords(StopwordFilter::empty());
        assert_eq!(cleaner.clean(&["Über-Größe"]), vec!["übergröße"]);
    }
}
