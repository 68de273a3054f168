//! Pipeline observer: hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic: stage start/end with a [`StageReport`], plus a borrowed view
//! of each artifact as it is produced. All methods have empty defaults.

use std::time::{Duration, Instant};

use tracing::info;

use crate::graph::{DenseMatrix, Vocabulary};
use crate::pathfinder::PathfinderNetwork;

pub const STAGE_PREPROCESS: &str = "preprocess";
pub const STAGE_VOCABULARY: &str = "vocabulary";
pub const STAGE_COOCCURRENCE: &str = "cooccurrence";
pub const STAGE_DISTANCE: &str = "distance";
pub const STAGE_NETWORK: &str = "network";

/// Stage names in execution order
pub const STAGES: [&str; 5] = [
    STAGE_PREPROCESS,
    STAGE_VOCABULARY,
    STAGE_COOCCURRENCE,
    STAGE_DISTANCE,
    STAGE_NETWORK,
];

/// Callbacks invoked by [`Pipeline::run`](super::runner::Pipeline::run)
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    fn on_tokens(&mut self, _tokens: &[String]) {}

    fn on_vocabulary(&mut self, _vocabulary: &Vocabulary) {}

    fn on_cooccurrence(&mut self, _counts: &DenseMatrix) {}

    fn on_distances(&mut self, _distances: &DenseMatrix) {}

    fn on_network(&mut self, _network: &PathfinderNetwork) {}
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Wall-clock timer for a single stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    start: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Metrics collected for one stage
#[derive(Debug, Clone, Default)]
pub struct StageReport {
    elapsed: Duration,
    items: Option<usize>,
    nodes: Option<usize>,
    pairs: Option<usize>,
    relays: Option<usize>,
    improvements: Option<usize>,
}

impl StageReport {
    /// Report with only the elapsed time
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of tokens the stage produced
    pub fn items(&self) -> Option<usize> {
        self.items
    }

    /// Matrix dimension
    pub fn nodes(&self) -> Option<usize> {
        self.nodes
    }

    /// Number of pairs with a finite or non-zero value, each pair once
    pub fn pairs(&self) -> Option<usize> {
        self.pairs
    }

    pub fn relays(&self) -> Option<usize> {
        self.relays
    }

    pub fn improvements(&self) -> Option<usize> {
        self.improvements
    }
}

/// Builder for [`StageReport`]s with optional metrics
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn items(mut self, items: usize) -> Self {
        self.report.items = Some(items);
        self
    }

    pub fn nodes(mut self, nodes: usize) -> Self {
        self.report.nodes = Some(nodes);
        self
    }

    pub fn pairs(mut self, pairs: usize) -> Self {
        self.report.pairs = Some(pairs);
        self
    }

    pub fn relays(mut self, relays: usize) -> Self {
        self.report.relays = Some(relays);
        self
    }

    pub fn improvements(mut self, improvements: usize) -> Self {
        self.report.improvements = Some(improvements);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Observer that records every stage report in order
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded `(stage, report)` pairs in execution order
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Report for a stage, if it ran
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    /// Sum of all stage durations
    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed()).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

/// Observer that emits one `tracing` event per completed stage
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        info!(
            stage,
            elapsed_ms = report.elapsed().as_secs_f64() * 1e3,
            items = report.items(),
            nodes = report.nodes(),
            pairs = report.pairs(),
            relays = report.relays(),
            improvements = report.improvements(),
            "stage complete"
        );
    }
}
