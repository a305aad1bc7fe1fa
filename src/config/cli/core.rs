//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;
use crate::config::schema::EvalSpec;

/// glmcv: repeated k-fold comparison of logistic regression models
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "glmcv")]
#[command(version)]
#[command(about = "Compare logistic regression models with repeated k-fold cross-validation")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run cross-validation on a dataset and rank the models
    Run(RunArgs),

    /// Validate a configuration file without running
    Validate(ValidateArgs),

    /// Write a synthetic admissions dataset
    Simulate(SimulateArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RunArgs {
    /// Admissions CSV (admit, gre_v, gre_q, gre_w, gpa, gender)
    #[arg(short, long, value_name = "CSV")]
    pub data: PathBuf,

    /// YAML configuration file (defaults are used when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Override number of folds
    #[arg(short = 'k', long)]
    pub folds: Option<usize>,

    /// Override number of repeats
    #[arg(short, long)]
    pub repeats: Option<usize>,

    /// Override random seed
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Balance the outcome across folds
    #[arg(long)]
    pub stratify: bool,

    /// Run fits sequentially instead of on the thread pool
    #[arg(long)]
    pub sequential: bool,

    /// Directory for report.json, split_metrics.csv and model_summaries.csv
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Output format for the leaderboard (text, json, markdown)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show detailed configuration summary
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the simulate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct SimulateArgs {
    /// Number of applicants to generate
    #[arg(short = 'n', long, default_value_t = 400)]
    pub rows: usize,

    /// Random seed
    #[arg(short, long, default_value_t = 2019)]
    pub seed: u64,

    /// Output CSV path
    #[arg(short, long, value_name = "CSV")]
    pub output: PathBuf,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to an EvalSpec
pub fn apply_overrides(spec: &mut EvalSpec, args: &RunArgs) {
    if let Some(folds) = args.folds {
        spec.resampling.folds = folds;
    }
    if let Some(repeats) = args.repeats {
        spec.resampling.repeats = repeats;
    }
    if let Some(seed) = args.seed {
        spec.resampling.seed = seed;
    }
    if args.stratify {
        spec.resampling.stratify = true;
    }
    if args.sequential {
        spec.parallel = false;
    }
}
