//! # glmcv
//!
//! Compare logistic regression model specifications on graduate-admissions
//! data with repeated k-fold cross-validation.
//!
//! The pipeline has four strictly sequential stages:
//!
//! - [`resample`]: repeated k-fold splits with per-repeat seeded streams
//! - [`glm`]: logistic regression fitted by IRLS on each analysis set
//! - [`eval`]: scoring of assessment rows, per-split metrics, summaries
//! - [`pipeline`]: the [`pipeline::CvEvaluator`] that ties them together
//!
//! [`data`] loads, writes and simulates datasets; [`config`] holds the YAML
//! schema and CLI arguments.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod eval;
pub mod glm;
pub mod pipeline;
pub mod resample;

pub use error::{Error, Result};
