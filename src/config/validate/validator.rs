//! Configuration validation logic
//!
//! Validates evaluation specifications before any resampling happens. The
//! fold count is checked against the dataset size later, by the resampler.

use super::error::ValidationError;
use crate::config::schema::EvalSpec;
use crate::glm::Term;
use std::collections::HashSet;

/// Validate an evaluation specification
pub fn validate_config(spec: &EvalSpec) -> Result<(), ValidationError> {
    if spec.resampling.folds < 2 {
        return Err(ValidationError::InvalidFolds(spec.resampling.folds));
    }
    if spec.resampling.repeats < 1 {
        return Err(ValidationError::InvalidRepeats(spec.resampling.repeats));
    }

    if spec.models.is_empty() {
        return Err(ValidationError::NoModels);
    }

    let mut names = HashSet::new();
    for model in &spec.models {
        if model.name.trim().is_empty() {
            return Err(ValidationError::EmptyModelName);
        }
        if !names.insert(model.name.as_str()) {
            return Err(ValidationError::DuplicateModel(model.name.clone()));
        }

        let mut terms = HashSet::new();
        for term in &model.terms {
            if let Term::Interaction(a, b) = term {
                if a == b {
                    return Err(ValidationError::SelfInteraction {
                        model: model.name.clone(),
                        predictor: a.to_string(),
                    });
                }
            }
            if !terms.insert(term.canonical()) {
                return Err(ValidationError::DuplicateTerm {
                    model: model.name.clone(),
                    term: term.to_string(),
                });
            }
        }
    }

    if spec.confidence_levels.is_empty() {
        return Err(ValidationError::NoConfidenceLevels);
    }
    for &level in &spec.confidence_levels {
        // NaN fails both comparisons
        if !(level > 0.0 && level < 1.0) {
            return Err(ValidationError::InvalidConfidenceLevel(level));
        }
    }

    if spec.fit.max_iter == 0 {
        return Err(ValidationError::InvalidMaxIter(spec.fit.max_iter));
    }
    if !(spec.fit.tolerance > 0.0) {
        return Err(ValidationError::InvalidTolerance(spec.fit.tolerance));
    }

    Ok(())
}
