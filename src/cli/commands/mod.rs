//! CLI command implementations

mod run;
mod simulate;
mod validate;

#[cfg(test)]
mod tests;

use crate::cli::LogLevel;
use crate::config::{Cli, Command};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);

    match cli.command {
        Command::Run(args) => run::run_cv(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Simulate(args) => simulate::run_simulate(args, log_level),
    }
}
