//! Pipeline execution.
//!
//! ## Submodules
//!
//! - [`artifacts`]: the output of a run
//! - [`traits`]: preprocessing and formatting stage traits
//! - [`runner`]: stage orchestration
//! - [`observer`]: logging, profiling, and debug hooks
//! - [`format`]: text and JSON result formatters

pub mod artifacts;
pub mod format;
pub mod observer;
pub mod runner;
pub mod traits;

pub use artifacts::PfnetOutput;
pub use format::{format_significant, write_matrix, JsonFormatter, TextFormatter};
pub use observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder,
    StageTimingObserver, TracingObserver, STAGES, STAGE_COOCCURRENCE, STAGE_DISTANCE,
    STAGE_NETWORK, STAGE_PREPROCESS, STAGE_VOCABULARY,
};
pub use runner::Pipeline;
pub use traits::{CleaningPreprocessor, NoopPreprocessor, Preprocessor, ResultFormatter};
