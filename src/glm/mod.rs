//! Generalized linear models: binomial family, logit link
//!
//! - `spec`: candidate model definitions ([`ModelSpec`], [`Term`])
//! - `design`: design-matrix construction
//! - `logistic`: IRLS fitting and prediction

mod design;
mod linalg;
mod logistic;
mod spec;


pub use design::{column_names, design_matrix, design_row};
pub use logistic::{
    logit, sigmoid, FitConfig, FitError, FittedModel, LogisticRegression, PROB_EPS,
};
pub use spec::{ModelSpec, Predictor, Term};
