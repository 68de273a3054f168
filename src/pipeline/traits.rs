//! Stage trait definitions for the pipeline.
//!
//! The numeric stages (vocabulary, co-occurrence, distance, closure) are
//! fixed; the two open seams are token preprocessing before the vocabulary
//! is built and result formatting after the network is assembled.

use std::io::Write;

use crate::error::Result;
use crate::nlp::TextCleaner;
use crate::pipeline::artifacts::PfnetOutput;
use crate::types::PfnetConfig;

// ============================================================================
// Preprocessor: optional token normalization (stage 0)
// ============================================================================

/// Optional preprocessing stage run on the raw token stream.
///
/// # Contract
///
/// - **Input**: the token vector, mutated in place.
/// - **Not necessarily idempotent**: cleaning `"the,"` yields `"the"`, which
///   a second stopword pass would drop.
pub trait Preprocessor {
    /// Preprocess the token stream in place.
    fn preprocess(&self, tokens: &mut Vec<String>, cfg: &PfnetConfig);
}

impl<P: Preprocessor + ?Sized> Preprocessor for Box<P> {
    fn preprocess(&self, tokens: &mut Vec<String>, cfg: &PfnetConfig) {
        (**self).preprocess(tokens, cfg);
    }
}

/// No-op preprocessor; tokens are used verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPreprocessor;

impl Preprocessor for NoopPreprocessor {
    #[inline]
    fn preprocess(&self, _tokens: &mut Vec<String>, _cfg: &PfnetConfig) {}
}

/// Stopword and symbol removal via [`TextCleaner`].
#[derive(Debug, Clone, Default)]
pub struct CleaningPreprocessor {
    cleaner: TextCleaner,
}

impl CleaningPreprocessor {
    pub fn new(cleaner: TextCleaner) -> Self {
        Self { cleaner }
    }
}

impl Preprocessor for CleaningPreprocessor {
    fn preprocess(&self, tokens: &mut Vec<String>, _cfg: &PfnetConfig) {
        *tokens = self.cleaner.clean(tokens);
    }
}

// ============================================================================
// ResultFormatter: serialize the output (final stage)
// ============================================================================

/// Writes a [`PfnetOutput`] to a byte sink.
///
/// Object-safe so the binary can pick a formatter at runtime.
pub trait ResultFormatter {
    fn format(&self, output: &PfnetOutput, cfg: &PfnetConfig, writer: &mut dyn Write)
        -> Result<()>;
}

impl<F: ResultFormatter + ?Sized> ResultFormatter for Box<F> {
    fn format(
        &self,
        output: &PfnetOutput,
        cfg: &PfnetConfig,
        writer: &mut dyn Write,
    ) -> Result<()> {
        (**self).format(output, cfg, writer)
    }
}
