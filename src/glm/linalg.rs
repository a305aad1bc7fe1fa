//! ndarray bridge to faer's dense Cholesky for the IRLS normal equations

use faer::prelude::*;
use faer::solvers::Cholesky;
use faer::{Mat, Side};
use ndarray::{s, Array1, Array2};

/// Relative pivot size below which a column counts as linearly dependent
pub const PIVOT_TOLERANCE: f64 = 1e-12;

fn to_faer(a: &Array2<f64>) -> Mat<f64> {
    Mat::from_fn(a.nrows(), a.ncols(), |i, j| a[[i, j]])
}

/// LLᵀ factorisation of a symmetric positive definite ndarray matrix
pub struct CholeskyFactor {
    llt: Cholesky<f64>,
    dim: usize,
}

impl CholeskyFactor {
    /// Factor `a`, or `None` when faer finds it is not positive definite
    pub fn new(a: &Array2<f64>) -> Option<Self> {
        let llt = to_faer(a).cholesky(Side::Lower).ok()?;
        Some(Self {
            llt,
            dim: a.nrows(),
        })
    }

    /// Squared diagonal of L, i.e. the pivots of the elimination
    pub fn pivots(&self) -> Vec<f64> {
        let l = self.llt.compute_l();
        (0..self.dim).map(|j| l.read(j, j).powi(2)).collect()
    }

    pub fn solve_vec(&self, b: &Array1<f64>) -> Array1<f64> {
        let rhs = Mat::from_fn(b.len(), 1, |i, _| b[i]);
        let x = self.llt.solve(rhs.as_ref());
        Array1::from_shape_fn(b.len(), |i| x.read(i, 0))
    }
}

/// Solve `a x = b` for symmetric positive definite `a`
pub fn solve_spd(a: &Array2<f64>, b: &Array1<f64>) -> Option<Array1<f64>> {
    CholeskyFactor::new(a).map(|llt| llt.solve_vec(b))
}

/// First column of a Gram matrix that is (numerically) a linear combination
/// of the columns before it
///
/// Leading blocks are factored in turn; column `j` is dependent when the
/// block ending at `j` is not positive definite or its last pivot collapses
/// relative to the original diagonal entry.
pub fn dependent_column(a: &Array2<f64>) -> Option<usize> {
    (0..a.nrows()).find(|&j| {
        let scale = a[[j, j]].abs();
        if !scale.is_finite() || scale == 0.0 {
            return true;
        }
        match CholeskyFactor::new(&a.slice(s![..=j, ..=j]).to_owned()) {
            None => true,
            Some(llt) => {
                let pivot = llt.pivots()[j];
                !pivot.is_finite() || pivot <= PIVOT_TOLERANCE * scale
            }
        }
    })
}
