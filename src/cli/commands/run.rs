//! Run command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{apply_overrides, load_config, EvalSpec, OutputFormat, RunArgs};
use crate::data::load_csv;
use crate::pipeline::{CvEvaluator, CvReport};

/// Render the report for stdout in the requested format
pub fn format_report(report: &CvReport, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(report.leaderboard().to_string()),
        OutputFormat::Markdown => Ok(report.leaderboard().to_markdown()),
        OutputFormat::Json => report.to_json().map_err(|e| format!("Output error: {e}")),
    }
}

/// Load the configuration (or defaults) and apply command-line overrides
pub fn resolve_spec(args: &RunArgs) -> Result<EvalSpec, String> {
    let mut spec = match &args.config {
        Some(path) => load_config(path).map_err(|e| format!("Config error: {e}"))?,
        None => EvalSpec::default(),
    };
    apply_overrides(&mut spec, args);
    Ok(spec)
}

pub fn run_cv(args: RunArgs, level: LogLevel) -> Result<(), String> {
    let spec = resolve_spec(&args)?;
    let evaluator = CvEvaluator::new(spec).map_err(|e| format!("Config error: {e}"))?;

    log(
        level,
        LogLevel::Normal,
        &format!("glmcv: cross-validating {}", args.data.display()),
    );

    let dataset = load_csv(&args.data).map_err(|e| format!("Data error: {e}"))?;

    let resampling = &evaluator.spec().resampling;
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "  {} records, {} folds x {} repeats, seed {}",
            dataset.len(),
            resampling.folds,
            resampling.repeats,
            resampling.seed
        ),
    );
    for model in &evaluator.spec().models {
        log(level, LogLevel::Verbose, &format!("  {model}"));
    }

    let report = evaluator
        .evaluate(&dataset)
        .map_err(|e| format!("Evaluation failed during {}: {e}", e.stage()))?;

    if level != LogLevel::Quiet {
        println!("{}", format_report(&report, args.format)?);
    }

    if let Some(dir) = &args.output_dir {
        let written = report
            .write_to_dir(dir)
            .map_err(|e| format!("Output error: {e}"))?;
        for path in written {
            log(level, LogLevel::Verbose, &format!("  Wrote {}", path.display()));
        }
        log(
            level,
            LogLevel::Normal,
            &format!("Results written to {}", dir.display()),
        );
    }

    Ok(())
}
