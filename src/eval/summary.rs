//! Cross-split distributional summaries per model
//!
//! Percentiles use linear interpolation between order statistics
//! (Hyndman-Fan type 7): for probability `q` over `n` sorted values,
//! `h = (n - 1) q` and the result interpolates between `x[floor(h)]` and
//! `x[floor(h) + 1]`. The estimator is monotone in `q`, so bands for higher
//! confidence levels always contain bands for lower ones.

use super::metrics::{Metric, SplitMetrics};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Confidence levels summarised by default
pub const DEFAULT_CONFIDENCE_LEVELS: [f64; 3] = [0.80, 0.95, 0.99];

/// Type 7 percentile of already sorted values, `q` in `[0, 1]`
pub fn percentile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let q = q.clamp(0.0, 1.0);
    let h = (sorted.len() - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    Some(sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo]))
}

/// Two-sided percentile band for one confidence level
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Confidence level, e.g. 0.95
    pub level: f64,
    pub lower: f64,
    pub upper: f64,
}

impl Band {
    /// Percentile probabilities `((1 - c) / 2, (1 + c) / 2)` for level `c`
    pub fn quantiles(level: f64) -> (f64, f64) {
        ((1.0 - level) / 2.0, (1.0 + level) / 2.0)
    }

    pub fn contains(&self, other: &Band) -> bool {
        self.lower <= other.lower && other.upper <= self.upper
    }
}

/// Median and percentile bands of one metric across splits
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    pub median: f64,
    pub bands: Vec<Band>,
}

impl MetricSummary {
    /// Summarise values in any order. `None` when there are no values.
    pub fn from_values(values: &[f64], levels: &[f64]) -> Option<Self> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let median = percentile(&sorted, 0.5)?;
        let bands = levels
            .iter()
            .map(|&level| {
                let (lo_q, hi_q) = Band::quantiles(level);
                Band {
                    level,
                    lower: percentile(&sorted, lo_q).unwrap_or(median),
                    upper: percentile(&sorted, hi_q).unwrap_or(median),
                }
            })
            .collect();

        Some(Self { median, bands })
    }

    /// Band for an exact confidence level, if it was requested
    pub fn band(&self, level: f64) -> Option<&Band> {
        self.bands.iter().find(|b| (b.level - level).abs() < 1e-12)
    }
}

/// Distributional summary of one model across every split
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub model: String,
    pub n_splits: usize,
    pub log_loss: MetricSummary,
    pub accuracy: MetricSummary,
}

impl ModelSummary {
    pub fn metric(&self, metric: Metric) -> &MetricSummary {
        match metric {
            Metric::Accuracy => &self.accuracy,
            Metric::LogLoss => &self.log_loss,
        }
    }
}

/// Group split metrics by model and summarise each group
///
/// Output follows `model_order`; models without any split metrics are
/// skipped. The result does not depend on the order of `split_metrics`.
pub fn summarize(split_metrics: &[SplitMetrics], model_order: &[String], levels: &[f64]) -> Vec<ModelSummary> {
    let mut by_model: HashMap<&str, (Vec<f64>, Vec<f64>)> = HashMap::new();
    for m in split_metrics {
        let entry = by_model.entry(m.model.as_str()).or_default();
        entry.0.push(m.get(Metric::LogLoss));
        entry.1.push(m.get(Metric::Accuracy));
    }

    model_order
        .iter()
        .filter_map(|name| {
            let (log_loss, accuracy) = by_model.get(name.as_str())?;
            Some(ModelSummary {
                model: name.clone(),
                n_splits: log_loss.len(),
                log_loss: MetricSummary::from_values(log_loss, levels)?,
                accuracy: MetricSummary::from_values(accuracy, levels)?,
            })
        })
        .collect()
}
