//! Pipeline runner: orchestrates stage execution and artifact flow.
//!
//! [`Pipeline::run`] executes the stages in order, handing each artifact by
//! value to the next stage and notifying a [`PipelineObserver`] at every
//! boundary:
//!
//! 1. Preprocess the token stream
//! 2. Build the vocabulary
//! 3. Count co-occurrences
//! 4. Convert counts to distances
//! 5. Run the closure and assemble the network
//!
//! Configuration and runtime limits are checked before any matrix is
//! allocated.

use tracing::{debug, info_span};

use crate::error::Result;
use crate::graph::{distance_matrix, CooccurrenceBuilder, Vocabulary};
use crate::pathfinder::PathfinderNetwork;
use crate::pipeline::artifacts::PfnetOutput;
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReportBuilder, STAGE_COOCCURRENCE, STAGE_DISTANCE,
    STAGE_NETWORK, STAGE_PREPROCESS, STAGE_VOCABULARY,
};
use crate::pipeline::traits::{NoopPreprocessor, Preprocessor};
use crate::types::PfnetConfig;

/// A pipeline with a pluggable preprocessing stage
#[derive(Debug, Clone, Default)]
pub struct Pipeline<Pre = NoopPreprocessor> {
    pub preprocessor: Pre,
}

impl Pipeline {
    /// Pipeline that uses tokens verbatim
    pub fn new() -> Self {
        Self {
            preprocessor: NoopPreprocessor,
        }
    }
}

impl<Pre: Preprocessor> Pipeline<Pre> {
    /// Pipeline with a custom preprocessor
    pub fn with_preprocessor(preprocessor: Pre) -> Self {
        Self { preprocessor }
    }

    /// Execute every stage on `tokens`
    pub fn run(
        &self,
        mut tokens: Vec<String>,
        cfg: &PfnetConfig,
        observer: &mut impl PipelineObserver,
    ) -> Result<PfnetOutput> {
        cfg.validate()?;

        // Stage 0: Preprocess
        let span = info_span!("pipeline_stage", stage = STAGE_PREPROCESS).entered();
        observer.on_stage_start(STAGE_PREPROCESS);
        let clock = StageClock::start();
        self.preprocessor.preprocess(&mut tokens, cfg);
        cfg.limits.check_tokens(tokens.len())?;
        let report = StageReportBuilder::new(clock.elapsed())
            .items(tokens.len())
            .build();
        observer.on_stage_end(STAGE_PREPROCESS, &report);
        observer.on_tokens(&tokens);
        drop(span);

        // Stage 1: Vocabulary
        let span = info_span!("pipeline_stage", stage = STAGE_VOCABULARY).entered();
        observer.on_stage_start(STAGE_VOCABULARY);
        let clock = StageClock::start();
        let vocabulary = Vocabulary::from_tokens(&tokens);
        cfg.limits.check_nodes(vocabulary.len())?;
        let report = StageReportBuilder::new(clock.elapsed())
            .nodes(vocabulary.len())
            .build();
        observer.on_stage_end(STAGE_VOCABULARY, &report);
        observer.on_vocabulary(&vocabulary);
        debug!(tokens = tokens.len(), terms = vocabulary.len(), "vocabulary built");
        drop(span);

        // Stage 2: Co-occurrence
        let span = info_span!("pipeline_stage", stage = STAGE_COOCCURRENCE).entered();
        observer.on_stage_start(STAGE_COOCCURRENCE);
        let clock = StageClock::start();
        let counts = CooccurrenceBuilder::from_config(cfg).build_from_tokens(&tokens, &vocabulary);
        drop(tokens);
        let report = StageReportBuilder::new(clock.elapsed())
            .nodes(counts.size())
            .pairs(counts.nonzero_pairs())
            .build();
        observer.on_stage_end(STAGE_COOCCURRENCE, &report);
        observer.on_cooccurrence(&counts);
        drop(span);

        // Stage 3: Distances
        let span = info_span!("pipeline_stage", stage = STAGE_DISTANCE).entered();
        observer.on_stage_start(STAGE_DISTANCE);
        let clock = StageClock::start();
        let distances = distance_matrix(&counts);
        drop(counts);
        let report = StageReportBuilder::new(clock.elapsed())
            .nodes(distances.size())
            .pairs(distances.finite_pairs())
            .build();
        observer.on_stage_end(STAGE_DISTANCE, &report);
        observer.on_distances(&distances);
        drop(span);

        // Stage 4: Closure + assembly
        let span = info_span!("pipeline_stage", stage = STAGE_NETWORK).entered();
        observer.on_stage_start(STAGE_NETWORK);
        let clock = StageClock::start();
        let network = PathfinderNetwork::build(distances, cfg)?;
        let report = StageReportBuilder::new(clock.elapsed())
            .nodes(network.size())
            .pairs(network.matrix().finite_pairs())
            .relays(network.relays())
            .improvements(network.improvements())
            .build();
        observer.on_stage_end(STAGE_NETWORK, &report);
        observer.on_network(&network);
        drop(span);

        Ok(PfnetOutput {
            vocabulary,
            network,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PfnetError;
    use crate::nlp::{StopwordFilter, TextCleaner};
    use crate::pipeline::observer::{NoopObserver, StageTimingObserver, STAGES};
    use crate::pipeline::traits::CleaningPreprocessor;
    use crate::types::RuntimeLimits;
    use crate::DenseMatrix;

    fn tokens(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_pipeline_run_with_noop_observer() {
        let output = Pipeline::new()
            .run(tokens("a b a"), &PfnetConfig::default(), &mut NoopObserver)
            .unwrap();

        assert_eq!(output.vocabulary.terms(), &["a", "b"]);
        assert_eq!(output.matrix().get(0, 0), 0.0);
        assert!(output.matrix().get(0, 1).is_infinite());
    }

    #[test]
    fn test_pipeline_run_with_timing_observer() {
        let mut obs = StageTimingObserver::new();
        let _ = Pipeline::new()
            .run(tokens("x y z x y"), &PfnetConfig::default(), &mut obs)
            .unwrap();

        let names: Vec<&str> = obs.reports().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, STAGES.to_vec());

        let network = obs.report(STAGE_NETWORK).unwrap();
        assert_eq!(network.nodes(), Some(3));
        assert_eq!(network.relays(), Some(3));
        assert!(network.improvements().is_some());
        assert_eq!(obs.report(STAGE_PREPROCESS).unwrap().items(), Some(5));
        // x-y, x-z and y-z all co-occur
        assert_eq!(obs.report(STAGE_COOCCURRENCE).unwrap().pairs(), Some(3));
    }

    #[test]
    fn test_pipeline_run_empty_input() {
        let output = Pipeline::new()
            .run(Vec::new(), &PfnetConfig::default(), &mut NoopObserver)
            .unwrap();

        assert!(output.is_empty());
        assert!(output.matrix().is_empty());
        assert!(output.links().is_empty());
    }

    #[test]
    fn test_pipeline_with_cleaning_preprocessor() {
        let pipeline = Pipeline::with_preprocessor(CleaningPreprocessor::new(
            TextCleaner::new().with_stopwords(StopwordFilter::from_list(&["the"])),
        ));
        let output = pipeline
            .run(tokens("The cat, the DOG 42"), &PfnetConfig::default(), &mut NoopObserver)
            .unwrap();

        assert_eq!(output.vocabulary.terms(), &["cat", "dog"]);
    }

    #[test]
    fn test_pipeline_rejects_invalid_config() {
        let cfg = PfnetConfig::new().with_minkowski_exponent(0.5);
        let err = Pipeline::new()
            .run(tokens("a b"), &cfg, &mut NoopObserver)
            .unwrap_err();
        assert!(matches!(err, PfnetError::InvalidParameter { .. }));
    }

    #[test]
    fn test_pipeline_enforces_node_limit() {
        let cfg = PfnetConfig::new().with_limits(RuntimeLimits {
            max_tokens: None,
            max_nodes: Some(2),
        });
        let err = Pipeline::new()
            .run(tokens("a b c"), &cfg, &mut NoopObserver)
            .unwrap_err();
        assert!(matches!(
            err,
            PfnetError::LimitExceeded {
                what: "node",
                limit: 2,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_pipeline_enforces_token_limit() {
        let cfg = PfnetConfig::new().with_limits(RuntimeLimits {
            max_tokens: Some(2),
            max_nodes: None,
        });
        assert!(Pipeline::new()
            .run(tokens("a a a"), &cfg, &mut NoopObserver)
            .is_err());
    }

    /// Captures artifacts as they pass through the observer hooks
    #[derive(Default)]
    struct ArtifactObserver {
        tokens: usize,
        cooccurrence: Option<DenseMatrix>,
        distances: Option<DenseMatrix>,
        saw_vocabulary: bool,
        saw_network: bool,
    }

    impl PipelineObserver for ArtifactObserver {
        fn on_tokens(&mut self, tokens: &[String]) {
            self.tokens = tokens.len();
        }
        fn on_vocabulary(&mut self, _vocabulary: &Vocabulary) {
            self.saw_vocabulary = true;
        }
        fn on_cooccurrence(&mut self, counts: &DenseMatrix) {
            self.cooccurrence = Some(counts.clone());
        }
        fn on_distances(&mut self, distances: &DenseMatrix) {
            self.distances = Some(distances.clone());
        }
        fn on_network(&mut self, _network: &PathfinderNetwork) {
            self.saw_network = true;
        }
    }

    #[test]
    fn test_pipeline_calls_all_artifact_observers() {
        let mut obs = ArtifactObserver::default();
        let _ = Pipeline::new()
            .run(tokens("a b a"), &PfnetConfig::default(), &mut obs)
            .unwrap();

        assert_eq!(obs.tokens, 3);
        assert!(obs.saw_vocabulary, "on_vocabulary not called");
        assert!(obs.saw_network, "on_network not called");
        assert_eq!(
            obs.cooccurrence.unwrap().to_rows(),
            vec![vec![0.0, 2.0], vec![2.0, 0.0]]
        );
        assert!(obs.distances.unwrap().get(0, 1).is_infinite());
    }
}
