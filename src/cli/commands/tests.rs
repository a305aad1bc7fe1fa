//! CLI command tests
//!
//! Drive the command handlers end to end against temporary files.

use super::*;
use crate::config::{parse_args, OutputFormat, RunArgs};
use crate::data::{load_csv, simulate, write_csv};
use crate::pipeline::{REPORT_FILE, SPLIT_METRICS_FILE, SUMMARIES_FILE};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn create_test_data(dir: &TempDir, rows: usize) -> PathBuf {
    let path = dir.path().join("admissions.csv");
    write_csv(&simulate(rows, 2019), &path).unwrap();
    path
}

fn create_test_config(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("cv.yaml");
    std::fs::write(
        &path,
        r#"
resampling:
  folds: 3
  repeats: 2
  seed: 11
models:
  - name: empty
  - name: gpa_only
    terms: [gpa]
"#,
    )
    .unwrap();
    path
}

fn run_args(data: &Path) -> RunArgs {
    RunArgs {
        data: data.to_path_buf(),
        config: None,
        folds: Some(3),
        repeats: Some(1),
        seed: None,
        stratify: false,
        sequential: false,
        output_dir: None,
        format: OutputFormat::Text,
    }
}

#[test]
fn test_simulate_command_writes_dataset() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("sim.csv");
    let cli = parse_args([
        "glmcv",
        "-q",
        "simulate",
        "--rows",
        "50",
        "--output",
        out.to_str().unwrap(),
    ])
    .unwrap();

    run_command(cli).unwrap();
    assert_eq!(load_csv(&out).unwrap().len(), 50);
}

#[test]
fn test_simulate_zero_rows_fails() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("sim.csv");
    let cli = parse_args(["glmcv", "simulate", "-n", "0", "-o", out.to_str().unwrap()]).unwrap();
    assert!(run_command(cli).is_err());
    assert!(!out.exists());
}

#[test]
fn test_validate_command() {
    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir);
    let cli = parse_args(["glmcv", "-q", "validate", config.to_str().unwrap(), "--detailed"]).unwrap();
    assert!(run_command(cli).is_ok());
}

#[test]
fn test_validate_command_rejects_bad_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.yaml");
    std::fs::write(&config, "resampling:\n  folds: 1\n").unwrap();
    let cli = parse_args(["glmcv", "-q", "validate", config.to_str().unwrap()]).unwrap();

    let err = run_command(cli).unwrap_err();
    assert!(err.contains("Validation failed"));
}

#[test]
fn test_run_command_writes_outputs() {
    let dir = TempDir::new().unwrap();
    let data = create_test_data(&dir, 120);
    let config = create_test_config(&dir);
    let out = dir.path().join("results");

    let cli = parse_args([
        "glmcv",
        "-q",
        "run",
        "--data",
        data.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--output-dir",
        out.to_str().unwrap(),
    ])
    .unwrap();
    run_command(cli).unwrap();

    assert!(out.join(REPORT_FILE).exists());
    assert!(out.join(SUMMARIES_FILE).exists());
    let metrics = std::fs::read_to_string(out.join(SPLIT_METRICS_FILE)).unwrap();
    // header + 3 folds x 2 repeats x 2 models
    assert_eq!(metrics.lines().count(), 1 + 12);
    assert!(metrics.contains("gpa_only"));
}

#[test]
fn test_run_command_missing_data() {
    let dir = TempDir::new().unwrap();
    let cli = parse_args([
        "glmcv",
        "-q",
        "run",
        "--data",
        dir.path().join("missing.csv").to_str().unwrap(),
    ])
    .unwrap();

    let err = run_command(cli).unwrap_err();
    assert!(err.contains("Data error"));
}

#[test]
fn test_run_command_invalid_override() {
    let dir = TempDir::new().unwrap();
    let data = create_test_data(&dir, 30);
    let mut args = run_args(&data);
    args.folds = Some(1);

    let err = run::run_cv(args, LogLevel::Quiet).unwrap_err();
    assert!(err.contains("Config error"));
}

#[test]
fn test_run_command_too_many_folds() {
    let dir = TempDir::new().unwrap();
    let data = create_test_data(&dir, 5);
    let mut args = run_args(&data);
    args.folds = Some(10);

    let err = run::run_cv(args, LogLevel::Quiet).unwrap_err();
    assert!(err.contains("configuration"));
}

#[test]
fn test_resolve_spec_applies_overrides_over_file() {
    let dir = TempDir::new().unwrap();
    let data = create_test_data(&dir, 30);
    let mut args = run_args(&data);
    args.config = Some(create_test_config(&dir));
    args.seed = Some(99);

    let spec = run::resolve_spec(&args).unwrap();
    assert_eq!(spec.resampling.folds, 3);
    assert_eq!(spec.resampling.repeats, 1);
    assert_eq!(spec.resampling.seed, 99);
    assert_eq!(spec.model_names(), vec!["empty", "gpa_only"]);
}

#[test]
fn test_format_report_variants() {
    let mut spec = crate::config::EvalSpec::default();
    spec.resampling.folds = 3;
    spec.resampling.repeats = 1;
    let report = crate::pipeline::CvEvaluator::new(spec)
        .unwrap()
        .evaluate(&simulate(120, 1))
        .unwrap();

    let text = run::format_report(&report, OutputFormat::Text).unwrap();
    assert!(text.contains("academics"));
    assert!(text.contains("┌"));

    let md = run::format_report(&report, OutputFormat::Markdown).unwrap();
    assert!(md.starts_with("| Model |"));

    let json = run::format_report(&report, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["folds"], 3);
    assert_eq!(value["summaries"].as_array().unwrap().len(), 3);
}
