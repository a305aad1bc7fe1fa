//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! glmcv run --data admissions.csv
//! glmcv run --data admissions.csv --config cv.yaml --output-dir ./results
//! glmcv run --data admissions.csv -k 5 -r 2 --seed 7 --format markdown
//! glmcv validate cv.yaml --detailed
//! glmcv simulate --rows 400 --seed 2019 --output admissions.csv
//! ```

mod core;
mod types;

pub use core::{apply_overrides, parse_args, Cli, Command, RunArgs, SimulateArgs, ValidateArgs};
pub use types::OutputFormat;
