//! Natural Language Processing components
//!
//! This module provides whitespace tokenization, stopword filtering, and
//! token cleaning.

pub mod cleaner;
pub mod stopwords;
pub mod tokenizer;

pub use cleaner::TextCleaner;
pub use stopwords::StopwordFilter;
pub use tokenizer::{read_tokens, split_bytes, split_tokens};
