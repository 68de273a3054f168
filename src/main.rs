//! `pfnet` command-line interface.
//!
//! Reads whitespace-delimited tokens from a file or stdin and writes the
//! Pathfinder network matrix to stdout or a file.
//!
//! ```bash
//! # Default parameters: window 5, every node a relay, r = 1
//! pfnet corpus.txt > network.txt
//!
//! # Clean the text first, keep 2000 words, emit JSON
//! pfnet --clean --limit 2000 --format json corpus.txt -o network.json
//!
//! # Max-leg combination, only the first 50 terms as relays
//! cat corpus.txt | pfnet -r inf -q 49
//! ```

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pfnet::{
    read_tokens, CleaningPreprocessor, JsonFormatter, NoopPreprocessor, PfnetConfig, Pipeline,
    Preprocessor, ResultFormatter, StopwordFilter, TextCleaner, TextFormatter, TracingObserver,
};

/// Output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One row per term, space-separated values.
    Text,
    /// JSON document with vocabulary, matrix, and links.
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "pfnet", version, about = "Build a Pathfinder network from word co-occurrences")]
struct Cli {
    /// Input text file (stdin when omitted or `-`)
    input: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON configuration file; explicit flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Co-occurrence window width
    #[arg(short, long)]
    window: Option<usize>,

    /// Largest term index allowed as a relay (default: all terms)
    #[arg(short = 'q', long)]
    relay_bound: Option<usize>,

    /// Minkowski exponent r >= 1 (`inf` for the max-leg combination)
    #[arg(short = 'r', long = "exponent")]
    exponent: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Round text output to this many significant digits (`%g` style)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=17))]
    precision: Option<u8>,

    /// Remove stopwords, digits, and symbols and lowercase tokens
    #[arg(long)]
    clean: bool,

    /// Stopword language used by --clean
    #[arg(long, default_value = "en", requires = "clean")]
    language: String,

    /// Keep at most this many tokens after cleaning
    #[arg(long, requires = "clean")]
    limit: Option<usize>,

    /// Reject inputs with more tokens than this
    #[arg(long)]
    max_tokens: Option<usize>,

    /// Reject inputs with a larger vocabulary than this
    #[arg(long)]
    max_nodes: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Merge the config file (if any) with command-line overrides
    fn config(&self) -> Result<PfnetConfig> {
        let mut config = match &self.config {
            Some(path) => PfnetConfig::from_path(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => PfnetConfig::default(),
        };

        if let Some(window) = self.window {
            config.window = window;
        }
        if let Some(relay_bound) = self.relay_bound {
            config.relay_bound = Some(relay_bound);
        }
        if let Some(exponent) = self.exponent {
            config.minkowski_exponent = exponent;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.limits.max_tokens = Some(max_tokens);
        }
        if let Some(max_nodes) = self.max_nodes {
            config.limits.max_nodes = Some(max_nodes);
        }

        config.validate()?;
        Ok(config)
    }

    fn preprocessor(&self) -> Box<dyn Preprocessor> {
        if !self.clean {
            return Box::new(NoopPreprocessor);
        }
        let mut cleaner = TextCleaner::new().with_stopwords(StopwordFilter::new(&self.language));
        if let Some(limit) = self.limit {
            cleaner = cleaner.with_limit(limit);
        }
        Box::new(CleaningPreprocessor::new(cleaner))
    }

    fn formatter(&self) -> Box<dyn ResultFormatter> {
        match self.format {
            OutputFormat::Text => Box::new(TextFormatter {
                precision: self.precision.map(usize::from),
            }),
            OutputFormat::Json => Box::new(JsonFormatter::pretty()),
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("pfnet={default_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(io::stdin().lock())),
    }
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config()?;
    info!(
        window = config.window,
        relay_bound = ?config.relay_bound,
        exponent = config.minkowski_exponent,
        "starting pathfinder network"
    );

    let tokens = read_tokens(open_input(cli.input.as_deref())?).context("failed to read input")?;

    let pipeline = Pipeline::with_preprocessor(cli.preprocessor());
    let output = pipeline
        .run(tokens, &config, &mut TracingObserver)
        .context("failed to build network")?;

    let mut writer = open_output(cli.output.as_deref())?;
    cli.formatter()
        .format(&output, &config, &mut writer)
        .context("failed to write output")?;

    info!(terms = output.len(), links = output.links().len(), "done");
    Ok(())
}
