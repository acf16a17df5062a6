//! Command-line interface code.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::{Tokenization, TverskyConfig, TverskyOptions};
use crate::json::score_json_with_config;
use crate::simulation::SimulationParams;
use crate::similarity::tversky_str;

// --------------------------------------------------
// Arguments.

#[derive(Debug, Parser)]
#[command(name = "tversky", about, author, version)]
/// Tversky index between two sequences
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score a single pair of sequences
    Score(ScoreArgs),

    /// Score every pair in a CSV file
    Batch(BatchArgs),
}

/// Keyword arguments shared by every scoring command.
#[derive(Debug, Clone, Default, Args)]
pub struct WeightArgs {
    #[arg(long, value_name = "ALPHA", help = "Weight of the first sequence's complement [default: 1]")]
    pub alpha: Option<f64>,
    #[arg(long, value_name = "BETA", help = "Weight of the second sequence's complement [default: 1]")]
    pub beta: Option<f64>,
    #[arg(long, help = "Use the symmetric variant")]
    pub symmetric: bool,
    #[arg(long, help = "Compare strings case-insensitively")]
    pub ignore_case: bool,
    #[arg(long, help = "Compare strings by overlapping bigrams instead of characters")]
    pub bigrams: bool,
    #[arg(long, value_name = "FILE", help = "JSON options record; flags override its values")]
    pub config: Option<PathBuf>,
}

/// Positional arguments for a single comparison.
#[derive(Debug, Args)]
pub struct ScoreArgs {
    #[arg(required = true, value_name = "A", help = "First sequence")]
    pub first: String,
    #[arg(required = true, value_name = "B", help = "Second sequence")]
    pub second: String,
    #[arg(long, help = "Parse A and B as JSON arrays or strings")]
    pub json: bool,
    #[command(flatten)]
    pub weights: WeightArgs,
}

/// Input and output files for batch scoring.
#[derive(Debug, Args)]
pub struct BatchArgs {
    #[arg(short, long, value_name = "INPUT", help = "CSV file with `first,second` columns")]
    pub input: PathBuf,
    #[arg(short, long, value_name = "OUTPUT", help = "Output .csv file")]
    pub output: PathBuf,
    #[command(flatten)]
    pub weights: WeightArgs,
}

/// Arguments of the `tversky_simulation` demo.
#[derive(Debug, Parser)]
#[command(name = "tversky_simulation", about, author, version)]
/// Mean symmetric Tversky index between random samples of one population
pub struct SimulationArgs {
    #[arg(long, default_value_t = 20, help = "Population size")]
    pub population_size: usize,
    #[arg(long, default_value_t = 100, help = "Number of samples")]
    pub sequence_count: usize,
    #[arg(long, default_value_t = 10, help = "Sample length")]
    pub sequence_length: usize,
    #[arg(long, default_value_t = 20, help = "Largest population value")]
    pub max_value: u32,
    #[arg(long, default_value_t = 42, help = "Random seed")]
    pub seed: u64,
    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,
}

impl From<&SimulationArgs> for SimulationParams {
    fn from(args: &SimulationArgs) -> Self {
        SimulationParams {
            population_size: args.population_size,
            sequence_count: args.sequence_count,
            sequence_length: args.sequence_length,
            max_value: args.max_value,
            seed: args.seed,
        }
    }
}

// --------------------------------------------------
// Helper functions

/// Filter used when `RUST_LOG` is not set.
pub fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "tversky_index=debug,info"
    } else {
        "tversky_index=warn"
    }
}

/// Sets up stderr logging for a binary. `RUST_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

impl WeightArgs {
    /// Merges the optional config file with the command-line flags.
    pub fn options(&self) -> Result<TverskyOptions> {
        let mut options = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("could not read config file {}", path.display()))?;
                let value: Value = serde_json::from_str(&text)
                    .with_context(|| format!("could not parse config file {}", path.display()))?;
                TverskyOptions::from_value(&value)?
            }
            None => TverskyOptions::default(),
        };
        if self.alpha.is_some() {
            options.alpha = self.alpha;
        }
        if self.beta.is_some() {
            options.beta = self.beta;
        }
        if self.symmetric {
            options.symmetric = Some(true);
        }
        if self.ignore_case {
            options.ignore_case = Some(true);
        }
        if self.bigrams {
            options.tokenization = Some(Tokenization::Bigrams);
        }
        Ok(options)
    }

    /// Validated configuration for this run.
    pub fn resolve(&self) -> Result<TverskyConfig> {
        let config = TverskyConfig::from_options(&self.options()?)?;
        debug!(?config, "resolved configuration");
        Ok(config)
    }
}

/// Scores one pair from the command line.
pub fn run_score(args: &ScoreArgs) -> Result<f64> {
    let config = args.weights.resolve()?;
    if args.json {
        let first: Value = serde_json::from_str(&args.first).context("A is not valid JSON")?;
        let second: Value = serde_json::from_str(&args.second).context("B is not valid JSON")?;
        return Ok(score_json_with_config(&first, &second, &config)?);
    }
    Ok(tversky_str(&args.first, &args.second, &config))
}

/// One input row of a batch file.
#[derive(Debug, Deserialize)]
pub struct PairRecord {
    pub first: String,
    pub second: String,
}

/// One output row of a batch file.
#[derive(Debug, Serialize)]
pub struct ScoredPair<'a> {
    pub first: &'a str,
    pub second: &'a str,
    pub score: f64,
}

/// Scores every string pair in `args.input` and writes them to `args.output`.
/// Returns the number of pairs written.
pub fn run_batch(args: &BatchArgs) -> Result<usize> {
    let config = args.weights.resolve()?;
    let mut rdr = ReaderBuilder::new()
        .from_path(&args.input)
        .with_context(|| format!("could not open {}", args.input.display()))?;
    let mut wtr = WriterBuilder::new().delimiter(b',').from_path(&args.output)?;

    let mut count = 0;
    for (i, result) in rdr.deserialize().enumerate() {
        let record: PairRecord = result?;
        let score = tversky_str(&record.first, &record.second, &config);
        debug!(pair = i, score, "scored pair");
        wtr.serialize(ScoredPair {
            first: &record.first,
            second: &record.second,
            score,
        })?;
        count += 1;
    }
    wtr.flush()?;
    info!(pairs = count, output = %args.output.display(), "batch scoring done");
    Ok(count)
}

/// Writes a score the way every subcommand prints it.
pub fn print_score(out: &mut impl Write, score: f64) -> Result<()> {
    writeln!(out, "{}", score)?;
    Ok(())
}
