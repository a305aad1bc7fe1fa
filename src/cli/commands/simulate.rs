//! Simulate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::SimulateArgs;
use crate::data::{simulate, write_csv};

pub fn run_simulate(args: SimulateArgs, level: LogLevel) -> Result<(), String> {
    if args.rows == 0 {
        return Err("Simulation needs at least one row".to_string());
    }

    let dataset = simulate(args.rows, args.seed);
    write_csv(&dataset, &args.output).map_err(|e| format!("Output error: {e}"))?;

    log(
        level,
        LogLevel::Normal,
        &format!(
            "Wrote {} simulated applicants to {} (admit rate {:.3})",
            dataset.len(),
            args.output.display(),
            dataset.admit_rate()
        ),
    );
    Ok(())
}
