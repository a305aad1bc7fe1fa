//! Unit tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::schema::*;
use crate::glm::{ModelSpec, Predictor, Term};

fn create_valid_spec() -> EvalSpec {
    EvalSpec::default()
}

#[test]
fn test_valid_config() {
    let spec = create_valid_spec();
    assert!(validate_config(&spec).is_ok());
}

#[test]
fn test_single_fold_rejected() {
    let mut spec = create_valid_spec();
    spec.resampling.folds = 1;
    assert_eq!(validate_config(&spec), Err(ValidationError::InvalidFolds(1)));
}

#[test]
fn test_zero_repeats_rejected() {
    let mut spec = create_valid_spec();
    spec.resampling.repeats = 0;
    assert_eq!(validate_config(&spec), Err(ValidationError::InvalidRepeats(0)));
}

#[test]
fn test_no_models() {
    let mut spec = create_valid_spec();
    spec.models.clear();
    assert_eq!(validate_config(&spec), Err(ValidationError::NoModels));
}

#[test]
fn test_duplicate_model_name() {
    let mut spec = create_valid_spec();
    spec.models.push(ModelSpec::empty());
    assert_eq!(
        validate_config(&spec),
        Err(ValidationError::DuplicateModel("empty".into()))
    );
}

#[test]
fn test_blank_model_name() {
    let mut spec = create_valid_spec();
    spec.models = vec![ModelSpec::new("  ", vec![])];
    assert_eq!(validate_config(&spec), Err(ValidationError::EmptyModelName));
}

#[test]
fn test_duplicate_interaction_in_either_order() {
    let mut spec = create_valid_spec();
    spec.models = vec![ModelSpec::new(
        "dup",
        vec![
            Term::Interaction(Predictor::GreV, Predictor::GreQ),
            Term::Interaction(Predictor::GreQ, Predictor::GreV),
        ],
    )];
    assert!(matches!(
        validate_config(&spec),
        Err(ValidationError::DuplicateTerm { .. })
    ));
}

#[test]
fn test_self_interaction() {
    let mut spec = create_valid_spec();
    spec.models = vec![ModelSpec::new(
        "sq",
        vec![Term::Interaction(Predictor::Gpa, Predictor::Gpa)],
    )];
    assert!(matches!(
        validate_config(&spec),
        Err(ValidationError::SelfInteraction { .. })
    ));
}

#[test]
fn test_empty_confidence_levels_rejected() {
    let mut spec = create_valid_spec();
    spec.confidence_levels.clear();
    assert_eq!(validate_config(&spec), Err(ValidationError::NoConfidenceLevels));
}

#[test]
fn test_confidence_level_bounds() {
    for bad in [0.0, 1.0, 95.0, -0.5, f64::NAN] {
        let mut spec = create_valid_spec();
        spec.confidence_levels = vec![0.8, bad];
        assert!(
            matches!(
                validate_config(&spec),
                Err(ValidationError::InvalidConfidenceLevel(_))
            ),
            "level {bad} accepted"
        );
    }
}

#[test]
fn test_fit_control() {
    let mut spec = create_valid_spec();
    spec.fit.max_iter = 0;
    assert_eq!(validate_config(&spec), Err(ValidationError::InvalidMaxIter(0)));

    let mut spec = create_valid_spec();
    spec.fit.tolerance = 0.0;
    assert!(matches!(
        validate_config(&spec),
        Err(ValidationError::InvalidTolerance(_))
    ));
}
