//! Binary logistic regression fitted by iteratively reweighted least squares
//!
//! # Algorithm
//!
//! Newton-Raphson on the binomial log-likelihood with logit link:
//!
//! ```text
//! mu   = sigmoid(X beta)
//! W    = diag(mu (1 - mu))
//! beta = beta + (X^T W X)^-1 X^T (y - mu)
//! ```
//!
//! Iteration stops once the relative deviance change
//! `|D - D_old| / (|D| + 0.1)` drops below the tolerance.

use super::design::{column_names, design_matrix, design_row};
use super::linalg::{dependent_column, solve_spd};
use super::spec::ModelSpec;
use crate::data::{AdmissionRecord, Dataset};
use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Probabilities are kept inside `[PROB_EPS, 1 - PROB_EPS]` wherever a
/// logarithm or logit of them is taken
pub const PROB_EPS: f64 = 1e-15;

/// Numerically stable sigmoid: σ(x) = 1 / (1 + exp(-x))
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Inverse of [`sigmoid`]
pub fn logit(p: f64) -> f64 {
    (p / (1.0 - p)).ln()
}

/// log(1 + exp(x)) without overflow
fn softplus(x: f64) -> f64 {
    x.max(0.0) + (-x.abs()).exp().ln_1p()
}

/// Binomial deviance from linear predictors: -2 Σ [y ln μ + (1-y) ln(1-μ)]
fn deviance(eta: &Array1<f64>, y: &Array1<f64>) -> f64 {
    eta.iter()
        .zip(y.iter())
        .map(|(&e, &yi)| yi * softplus(-e) + (1.0 - yi) * softplus(e))
        .sum::<f64>()
        * 2.0
}

/// Centre and scale every non-intercept column
///
/// Returns the index of a column with (numerically) zero spread, which is
/// collinear with the intercept.
fn standardize(x: &Array2<f64>) -> Result<(Array2<f64>, Vec<f64>, Vec<f64>), usize> {
    let n = x.nrows() as f64;
    let mut xs = x.clone();
    let mut centers = vec![0.0; x.ncols()];
    let mut scales = vec![1.0; x.ncols()];

    for j in 1..x.ncols() {
        let col = x.column(j);
        let center = col.sum() / n;
        let sd = (col.iter().map(|v| (v - center).powi(2)).sum::<f64>() / n).sqrt();
        if !sd.is_finite() || sd <= 1e-12 * center.abs().max(1.0) {
            return Err(j);
        }
        xs.column_mut(j).mapv_inplace(|v| (v - center) / sd);
        centers[j] = center;
        scales[j] = sd;
    }

    Ok((xs, centers, scales))
}

/// Map coefficients fitted on standardized columns back to the raw scale
fn unstandardize(beta: &Array1<f64>, centers: &[f64], scales: &[f64]) -> Array1<f64> {
    let mut raw = beta.clone();
    for j in 1..beta.len() {
        raw[j] = beta[j] / scales[j];
        raw[0] -= raw[j] * centers[j];
    }
    raw
}

/// Convergence control for IRLS
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    /// Maximum Newton iterations
    pub max_iter: usize,
    /// Relative deviance change that counts as converged
    pub tolerance: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            max_iter: 25,
            tolerance: 1e-8,
        }
    }
}

/// Reasons a model cannot be fitted on an analysis set
#[derive(Clone, Debug, PartialEq, Error)]
pub enum FitError {
    #[error("analysis set is empty")]
    EmptyPartition,

    #[error("outcome has no variation in the analysis set")]
    NoOutcomeVariation,

    #[error("design matrix is rank deficient at column '{column}'")]
    RankDeficient { column: String },

    #[error("IRLS did not converge after {iterations} iterations")]
    NotConverged { iterations: usize },

    #[error("coefficients became non-finite at iteration {iteration}")]
    NonFinite { iteration: usize },
}

/// Coefficients of one model fitted to one analysis set
#[derive(Clone, Debug, PartialEq)]
pub struct FittedModel {
    spec: ModelSpec,
    coefficients: Array1<f64>,
    /// IRLS iterations used (0 for closed-form fits)
    pub iterations: usize,
    /// Residual deviance on the analysis set
    pub deviance: f64,
    /// Number of analysis rows
    pub n_obs: usize,
}

impl FittedModel {
    pub fn spec(&self) -> &ModelSpec {
        &self.spec
    }

    /// Coefficients, intercept first, in term order
    pub fn coefficients(&self) -> &Array1<f64> {
        &self.coefficients
    }

    /// (column name, estimate) pairs
    pub fn coefficient_table(&self) -> Vec<(String, f64)> {
        column_names(&self.spec)
            .into_iter()
            .zip(self.coefficients.iter().copied())
            .collect()
    }

    pub fn linear_predictor(&self, record: &AdmissionRecord) -> f64 {
        design_row(&self.spec, record).dot(&self.coefficients)
    }

    /// Probability of admission for any record with the same schema
    pub fn predict_proba(&self, record: &AdmissionRecord) -> f64 {
        sigmoid(self.linear_predictor(record))
    }
}

/// Logistic regression estimator for one model specification
#[derive(Clone, Debug)]
pub struct LogisticRegression {
    spec: ModelSpec,
    config: FitConfig,
}

impl LogisticRegression {
    pub fn new(spec: ModelSpec) -> Self {
        Self {
            spec,
            config: FitConfig::default(),
        }
    }

    pub fn with_config(mut self, config: FitConfig) -> Self {
        self.config = config;
        self
    }

    /// Fit using only the given dataset rows
    pub fn fit(&self, dataset: &Dataset, rows: &[usize]) -> Result<FittedModel, FitError> {
        if rows.is_empty() {
            return Err(FitError::EmptyPartition);
        }

        let (x, y) = design_matrix(&self.spec, dataset, rows);
        let n_obs = rows.len();
        let mean = y.sum() / n_obs as f64;

        if self.spec.is_intercept_only() {
            let p = mean.clamp(PROB_EPS, 1.0 - PROB_EPS);
            let coefficients = Array1::from_elem(1, logit(p));
            let eta = x.dot(&coefficients);
            return Ok(FittedModel {
                spec: self.spec.clone(),
                coefficients,
                iterations: 0,
                deviance: deviance(&eta, &y),
                n_obs,
            });
        }

        if mean == 0.0 || mean == 1.0 {
            return Err(FitError::NoOutcomeVariation);
        }

        let names = column_names(&self.spec);
        let rank_error = |col: usize| FitError::RankDeficient {
            column: names[col].clone(),
        };

        // Work on centred and scaled columns; coefficients are mapped back
        // to the original scale before returning.
        let (xs, centers, scales) = standardize(&x).map_err(rank_error)?;
        if let Some(col) = dependent_column(&xs.t().dot(&xs)) {
            return Err(rank_error(col));
        }

        let mut beta = Array1::<f64>::zeros(xs.ncols());
        beta[0] = logit(mean);
        let mut eta = xs.dot(&beta);
        let mut dev_old = deviance(&eta, &y);

        for iteration in 1..=self.config.max_iter {
            let mu = eta.mapv(sigmoid);
            let w = mu.mapv(|m| m * (1.0 - m));

            let xw = &xs * &w.view().insert_axis(Axis(1));
            let xtwx = xw.t().dot(&xs);
            let score = xs.t().dot(&(&y - &mu));

            // X has full column rank, so an indefinite XᵀWX here means the
            // weights vanished (separation).
            let step = solve_spd(&xtwx, &score).ok_or(FitError::NotConverged {
                iterations: iteration,
            })?;
            beta += &step;

            if beta.iter().any(|b| !b.is_finite()) {
                return Err(FitError::NonFinite { iteration });
            }

            eta = xs.dot(&beta);
            let dev = deviance(&eta, &y);
            let change = (dev - dev_old).abs() / (dev.abs() + 0.1);
            tracing::trace!(iteration, deviance = dev, change, model = %self.spec.name, "IRLS step");

            if change < self.config.tolerance {
                return Ok(FittedModel {
                    spec: self.spec.clone(),
                    coefficients: unstandardize(&beta, &centers, &scales),
                    iterations: iteration,
                    deviance: dev,
                    n_obs,
                });
            }
            dev_old = dev;
        }

        Err(FitError::NotConverged {
            iterations: self.config.max_iter,
        })
    }
}
