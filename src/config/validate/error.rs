//! Validation error types
//!
//! Defines all validation error variants for evaluation specifications.

/// Validation error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid fold count: {0} (must be >= 2)")]
    InvalidFolds(usize),

    #[error("Invalid repeat count: {0} (must be >= 1)")]
    InvalidRepeats(usize),

    #[error("At least one model specification is required")]
    NoModels,

    #[error("Model name cannot be empty")]
    EmptyModelName,

    #[error("Duplicate model name: {0}")]
    DuplicateModel(String),

    #[error("Model '{model}' lists term '{term}' more than once")]
    DuplicateTerm { model: String, term: String },

    #[error("Model '{model}' has an interaction of '{predictor}' with itself")]
    SelfInteraction { model: String, predictor: String },

    #[error("At least one confidence level is required")]
    NoConfidenceLevels,

    #[error("Invalid confidence level: {0} (must be > 0.0 and < 1.0)")]
    InvalidConfidenceLevel(f64),

    #[error("Invalid max_iter: {0} (must be > 0)")]
    InvalidMaxIter(usize),

    #[error("Invalid tolerance: {0} (must be > 0.0)")]
    InvalidTolerance(f64),
}
