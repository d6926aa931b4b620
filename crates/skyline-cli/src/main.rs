//! Command line runner for stored match scoresheets.
//!
//! Reads score files written by the scorer UI, checks them and prints the
//! resulting scores as JSON.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use skyline_core::{InvalidScoresheet, MatchScoresheet, Scorer, Scores, ScoringConfig};

#[derive(Parser)]
#[command(name = "skyline")]
#[command(about = "Score and validate Skyline match scoresheets", long_about = None)]
struct Cli {
    /// Scoring constants override (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a scoresheet and print its scores
    Score {
        /// Score file path
        file: PathBuf,

        /// Print scores even if the scoresheet is invalid
        #[arg(long)]
        provisional: bool,
    },

    /// Validate one or more scoresheets
    Validate {
        /// Score file paths
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[derive(Serialize)]
struct ScoreReport<'a> {
    arena_id: &'a str,
    match_number: u32,
    valid: bool,
    scores: Scores,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<ScoringConfig> {
    let Some(path) = path else {
        return Ok(ScoringConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn load_scoresheet(path: &Path) -> Result<MatchScoresheet> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading scoresheet {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing scoresheet {}", path.display()))
}

fn score(path: &Path, provisional: bool, config: ScoringConfig) -> Result<ExitCode> {
    let sheet = load_scoresheet(path)?;
    let scorer = Scorer::with_config(&sheet.teams, sheet.districts(), config);

    let valid = match scorer.validate() {
        Ok(()) => true,
        Err(err) if provisional => {
            tracing::warn!(code = %err.code, "scoring invalid scoresheet provisionally");
            false
        }
        Err(err) => {
            eprintln!("{}: {err}", path.display());
            return Ok(ExitCode::FAILURE);
        }
    };

    let report = ScoreReport {
        arena_id: &sheet.arena_id,
        match_number: sheet.match_number,
        valid,
        scores: scorer.calculate_scores(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(ExitCode::SUCCESS)
}

fn validate_one(path: &Path, config: ScoringConfig) -> Result<Result<(), InvalidScoresheet>> {
    let sheet = load_scoresheet(path)?;
    Ok(Scorer::with_config(&sheet.teams, sheet.districts(), config).validate())
}

fn validate(files: &[PathBuf], config: ScoringConfig) -> ExitCode {
    // Each file gets its own scorer, so they can be checked independently
    let results: Vec<_> = files
        .par_iter()
        .map(|path| (path, validate_one(path, config)))
        .collect();

    let mut failures = 0usize;
    for (path, result) in results {
        match result {
            Ok(Ok(())) => println!("{}: ok", path.display()),
            Ok(Err(err)) => {
                failures += 1;
                println!("{}: {err}", path.display());
            }
            Err(err) => {
                failures += 1;
                println!("{}: error: {err:#}", path.display());
            }
        }
    }

    tracing::debug!(files = files.len(), failures, "validation finished");
    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Commands::Score { file, provisional } => score(&file, provisional, config),
        Commands::Validate { files } => Ok(validate(&files, config)),
    }
}
