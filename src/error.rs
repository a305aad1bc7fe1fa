//! Error types for the cross-validation pipeline
//!
//! Every failure is fatal for the run that hit it. The only recoverable
//! numeric condition (a fitted probability of exactly 0 or 1) is handled by
//! clamping inside the log-loss computation and never reaches this type.

use crate::glm::FitError;
use crate::resample::SplitId;
use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed resampling, model or summary parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read or parsed
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Input dataset is missing required fields or has values of the wrong type
    #[error("Schema error: {0}")]
    Schema(String),

    /// A model could not be fitted on one split's analysis set
    #[error("Fit failed for {split}, model '{model}': {source}")]
    Fit {
        split: SplitId,
        model: String,
        #[source]
        source: FitError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Name of the pipeline stage the error belongs to
    pub fn stage(&self) -> &'static str {
        match self {
            Error::InvalidConfig(_) | Error::ConfigError(_) => "configuration",
            Error::Schema(_) | Error::Csv(_) => "data loading",
            Error::Fit { .. } => "model fitting",
            Error::Io(_) | Error::Serialization(_) => "output",
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
