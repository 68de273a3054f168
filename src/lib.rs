//! Pathfinder network construction
//!
//! Builds a Pathfinder network (PFNET) from a stream of tokens:
//!
//! 1. Tokens are sorted into a [`Vocabulary`]
//! 2. Sliding-window co-occurrence counts form a symmetric matrix
//! 3. Inverted cosine similarity between count rows gives distances
//! 4. A generalized Floyd–Warshall closure combines path legs with the
//!    Minkowski function of order `r`, using only nodes `0..=q` as relays
//! 5. The closure and the original distances are assembled into the final
//!    matrix
//!
//! # Example
//!
//! ```
//! use pfnet::{NoopObserver, PfnetConfig, Pipeline};
//!
//! let tokens: Vec<String> = "a b a".split_whitespace().map(String::from).collect();
//! let output = Pipeline::new()
//!     .run(tokens, &PfnetConfig::default(), &mut NoopObserver)
//!     .unwrap();
//!
//! assert_eq!(output.vocabulary.terms(), &["a", "b"]);
//! assert!(output.matrix().get(0, 1).is_infinite());
//! ```

pub mod error;
pub mod graph;
pub mod nlp;
pub mod pathfinder;
pub mod pipeline;
pub mod types;

pub use error::{PfnetError, Result};
pub use graph::{
    cosine_similarity, distance_matrix, similarity_to_distance, CooccurrenceBuilder, DenseMatrix,
    Vocabulary,
};
pub use nlp::{read_tokens, split_bytes, split_tokens, StopwordFilter, TextCleaner};
pub use pathfinder::{
    assemble, minkowski_combine, ClosureResult, Edge, PathfinderClosure, PathfinderNetwork,
};
pub use pipeline::{
    CleaningPreprocessor, JsonFormatter, NoopObserver, NoopPreprocessor, PfnetOutput, Pipeline,
    PipelineObserver, Preprocessor, ResultFormatter, StageTimingObserver, TextFormatter,
    TracingObserver,
};
pub use types::{PfnetConfig, RuntimeLimits, DEFAULT_MINKOWSKI_EXPONENT, DEFAULT_WINDOW};

/// Build the Pathfinder network for a token sequence with default stages
///
/// Convenience wrapper around [`Pipeline::run`] without preprocessing or
/// observation.
pub fn pathfinder_network(tokens: Vec<String>, config: &PfnetConfig) -> Result<PfnetOutput> {
    Pipeline::new().run(tokens, config, &mut NoopObserver)
}
