//! Per-split accuracy and log loss

use super::score::PredictionRecord;
use crate::glm::PROB_EPS;
use crate::resample::SplitId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Metric computed for every (split, model) group
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Fraction of correctly classified records
    Accuracy,
    /// Negative mean Bernoulli log-likelihood
    LogLoss,
}

impl Metric {
    /// Whether higher values are better for this metric
    pub fn higher_is_better(&self) -> bool {
        matches!(self, Metric::Accuracy)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Accuracy => "accuracy",
            Metric::LogLoss => "log_loss",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Clamp a probability away from 0 and 1 so its logarithm is finite
///
/// Returns the clamped value and whether clamping changed it.
pub fn clamp_probability(p: f64) -> (f64, bool) {
    let clamped = p.clamp(PROB_EPS, 1.0 - PROB_EPS);
    (clamped, clamped != p)
}

/// Log-loss contribution of one observation: -[y ln p + (1-y) ln(1-p)]
pub fn log_loss_term(admit: u8, fitted: f64) -> f64 {
    let (p, _) = clamp_probability(fitted);
    if admit == 1 {
        -p.ln()
    } else {
        -(1.0 - p).ln()
    }
}

/// Accuracy and log loss for one (split, model) group
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitMetrics {
    pub split: SplitId,
    pub model: String,
    /// Number of assessment records scored
    pub n: usize,
    pub accuracy: f64,
    pub log_loss: f64,
    /// Records whose probability had to be clamped for the log loss
    pub clamped: usize,
}

impl SplitMetrics {
    /// Compute metrics over the predictions of one group
    ///
    /// Returns `None` for an empty group.
    pub fn from_predictions(split: SplitId, model: &str, predictions: &[PredictionRecord]) -> Option<Self> {
        if predictions.is_empty() {
            return None;
        }
        let n = predictions.len();
        let correct = predictions.iter().filter(|p| p.correct).count();

        let mut clamped = 0;
        let mut loss_sum = 0.0;
        for pred in predictions {
            let (_, was_clamped) = clamp_probability(pred.fitted);
            clamped += usize::from(was_clamped);
            loss_sum += log_loss_term(pred.admit, pred.fitted);
        }

        Some(Self {
            split,
            model: model.to_string(),
            n,
            accuracy: correct as f64 / n as f64,
            log_loss: loss_sum / n as f64,
            clamped,
        })
    }

    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Accuracy => self.accuracy,
            Metric::LogLoss => self.log_loss,
        }
    }
}
