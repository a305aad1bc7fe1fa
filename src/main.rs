//! glmcv CLI
//!
//! Repeated k-fold comparison of logistic regression models.
//!
//! # Usage
//!
//! ```bash
//! # Write a synthetic dataset
//! glmcv simulate --rows 400 --output admissions.csv
//!
//! # Compare the default models (10 folds x 10 repeats)
//! glmcv run --data admissions.csv
//!
//! # Custom models and outputs
//! glmcv run --data admissions.csv --config cv.yaml --output-dir results
//!
//! # Validate config
//! glmcv validate cv.yaml
//! ```

use clap::Parser;
use glmcv::cli::{run_command, Cli, LogLevel};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing(level: LogLevel) {
    // Explicit -v/-q wins over RUST_LOG; otherwise RUST_LOG, then the default.
    let directive = level.tracing_directive();
    let filter = if level == LogLevel::Normal {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
    } else {
        EnvFilter::new(directive)
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(LogLevel::from_flags(cli.verbose, cli.quiet));

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
