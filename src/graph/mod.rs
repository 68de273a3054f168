//! Graph construction and representation
//!
//! This module turns a token sequence into the distance matrix the
//! Pathfinder closure runs on: vocabulary, co-occurrence counts, and
//! cosine-derived distances, all stored as dense matrices.

pub mod cooccurrence;
pub mod distance;
pub mod matrix;
pub mod vocabulary;

pub use cooccurrence::CooccurrenceBuilder;
pub use distance::{cosine_similarity, distance_matrix, similarity_to_distance};
pub use matrix::DenseMatrix;
pub use vocabulary::Vocabulary;
