//! YAML schema for cross-validation runs
//!
//! Every section is optional; an empty document yields the default run:
//! 10 x 10 repeated k-fold over the `empty`, `academics` and `full` models.

use crate::eval::DEFAULT_CONFIDENCE_LEVELS;
use crate::glm::{FitConfig, ModelSpec};
use serde::{Deserialize, Serialize};

/// Complete evaluation specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalSpec {
    /// How the dataset is resampled
    pub resampling: ResamplingSpec,

    /// Candidate models, compared in this order
    pub models: Vec<ModelSpec>,

    /// IRLS convergence control
    pub fit: FitConfig,

    /// Two-sided confidence levels for the percentile bands
    pub confidence_levels: Vec<f64>,

    /// Fit and score splits on the rayon thread pool
    pub parallel: bool,

    /// Include every scored record in the report
    pub keep_predictions: bool,
}

impl Default for EvalSpec {
    fn default() -> Self {
        Self {
            resampling: ResamplingSpec::default(),
            models: ModelSpec::defaults(),
            fit: FitConfig::default(),
            confidence_levels: DEFAULT_CONFIDENCE_LEVELS.to_vec(),
            parallel: true,
            keep_predictions: false,
        }
    }
}

/// Resampling seed used when none is configured
pub const DEFAULT_SEED: u64 = 2019;

/// Repeated k-fold parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResamplingSpec {
    /// Number of folds per repeat
    pub folds: usize,
    /// Number of independent repeats
    pub repeats: usize,
    /// Seed for every random fold assignment in the run
    ///
    /// Falls back to [`DEFAULT_SEED`] when the config omits it, so two runs of
    /// an unseeded config still produce identical splits.
    pub seed: u64,
    /// Balance the outcome across folds
    pub stratify: bool,
}

impl Default for ResamplingSpec {
    fn default() -> Self {
        Self {
            folds: 10,
            repeats: 10,
            seed: DEFAULT_SEED,
            stratify: false,
        }
    }
}

impl EvalSpec {
    /// Model names in comparison order
    pub fn model_names(&self) -> Vec<String> {
        self.models.iter().map(|m| m.name.clone()).collect()
    }
}
