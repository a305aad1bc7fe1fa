//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, EvalSpec, ValidateArgs, DEFAULT_SEED};

/// Format resampling parameters as a string
pub fn format_resampling_info(spec: &EvalSpec) -> String {
    let r = &spec.resampling;
    let mut lines = vec![
        format!("  Folds: {}", r.folds),
        format!("  Repeats: {}", r.repeats),
        if r.seed == DEFAULT_SEED {
            format!("  Seed: {} (default; set resampling.seed to choose another)", r.seed)
        } else {
            format!("  Seed: {}", r.seed)
        },
    ];
    if r.stratify {
        lines.push("  Stratified by outcome".to_string());
    }
    lines.join("\n")
}

/// Format candidate models as formulas
pub fn format_models_info(spec: &EvalSpec) -> String {
    let mut lines = vec![format!("  Models ({}):", spec.models.len())];
    for model in &spec.models {
        lines.push(format!("    {}: {}", model.name, model.formula()));
    }
    lines.join("\n")
}

/// Format fitting and summary settings as a string
pub fn format_fit_info(spec: &EvalSpec) -> String {
    let levels: Vec<String> = spec
        .confidence_levels
        .iter()
        .map(|c| format!("{:.0}%", c * 100.0))
        .collect();
    [
        format!("  Max IRLS iterations: {}", spec.fit.max_iter),
        format!("  Tolerance: {:e}", spec.fit.tolerance),
        format!("  Confidence levels: {}", levels.join(", ")),
        format!("  Parallel: {}", spec.parallel),
    ]
    .join("\n")
}

/// Print detailed configuration summary
pub fn print_detailed_summary(spec: &EvalSpec) {
    println!();
    println!("Configuration Summary:");
    println!("{}", format_resampling_info(spec));
    println!();
    println!("{}", format_models_info(spec));
    println!();
    println!("{}", format_fit_info(spec));
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let spec = load_config(&args.config).map_err(|e| format!("Validation failed: {e}"))?;

    log(level, LogLevel::Normal, "Configuration is valid");

    if args.detailed && level != LogLevel::Quiet {
        print_detailed_summary(&spec);
    }

    Ok(())
}
