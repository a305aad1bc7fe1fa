//! Command-line front end for glmcv
//!
//! Command handlers return `Result<(), String>` so the binary can print the
//! message and exit non-zero.

mod commands;
mod logging;

pub use commands::run_command;
pub use logging::LogLevel;

pub use crate::config::Cli;
