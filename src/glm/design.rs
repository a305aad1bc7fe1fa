//! Design matrix construction

use super::spec::ModelSpec;
use crate::data::{AdmissionRecord, Dataset};
use ndarray::{Array1, Array2};

/// Covariate row for one record: intercept then one entry per term
pub fn design_row(spec: &ModelSpec, record: &AdmissionRecord) -> Array1<f64> {
    let mut row = Array1::zeros(spec.n_coefficients());
    row[0] = 1.0;
    for (j, term) in spec.terms.iter().enumerate() {
        row[j + 1] = term.value(record);
    }
    row
}

/// Design matrix and response for the given dataset rows
pub fn design_matrix(spec: &ModelSpec, dataset: &Dataset, rows: &[usize]) -> (Array2<f64>, Array1<f64>) {
    let p = spec.n_coefficients();
    let mut x = Array2::zeros((rows.len(), p));
    let mut y = Array1::zeros(rows.len());

    for (i, &row) in rows.iter().enumerate() {
        let record = dataset.get(row);
        x[[i, 0]] = 1.0;
        for (j, term) in spec.terms.iter().enumerate() {
            x[[i, j + 1]] = term.value(record);
        }
        y[i] = record.outcome();
    }

    (x, y)
}

/// Column labels matching [`design_matrix`]
pub fn column_names(spec: &ModelSpec) -> Vec<String> {
    std::iter::once("(Intercept)".to_string())
        .chain(spec.terms.iter().map(ToString::to_string))
        .collect()
}
