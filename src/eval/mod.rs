//! Scoring and aggregation
//!
//! - `score`: applies a fitted model to a split's assessment rows
//! - `metrics`: per-split accuracy and log loss
//! - `summary`: median and percentile bands per model across splits
//! - `leaderboard`: ranks models by median log loss
//!
//! ## Example
//!
//! ```
//! use glmcv::eval::{MetricSummary, DEFAULT_CONFIDENCE_LEVELS};
//!
//! let log_losses = [0.61, 0.58, 0.66, 0.60, 0.63];
//! let summary = MetricSummary::from_values(&log_losses, &DEFAULT_CONFIDENCE_LEVELS).unwrap();
//! assert!((summary.median - 0.61).abs() < 1e-12);
//! ```

mod leaderboard;
mod metrics;
mod score;
mod summary;

#[cfg(test)]
mod tests;

pub use leaderboard::Leaderboard;
pub use metrics::{clamp_probability, log_loss_term, Metric, SplitMetrics};
pub use score::{classify, score_split, PredictionRecord, DECISION_THRESHOLD};
pub use summary::{
    percentile, summarize, Band, MetricSummary, ModelSummary, DEFAULT_CONFIDENCE_LEVELS,
};
