//! End-to-end cross-validation
//!
//! [`CvEvaluator`] resamples a dataset, fits every configured model on each
//! split's analysis rows, scores the assessment rows and aggregates the
//! per-split metrics into a [`CvReport`].
//!
//! ## Example
//!
//! ```
//! use glmcv::config::EvalSpec;
//! use glmcv::data::simulate;
//! use glmcv::pipeline::CvEvaluator;
//!
//! let mut spec = EvalSpec::default();
//! spec.resampling.folds = 5;
//! spec.resampling.repeats = 2;
//!
//! let report = CvEvaluator::new(spec)?.evaluate(&simulate(200, 7))?;
//! assert_eq!(report.split_metrics.len(), 5 * 2 * 3);
//! println!("{}", report.leaderboard());
//! # Ok::<(), glmcv::Error>(())
//! ```

mod evaluator;
mod report;


pub use evaluator::CvEvaluator;
pub use report::{CvReport, REPORT_FILE, SPLIT_METRICS_FILE, SUMMARIES_FILE};
