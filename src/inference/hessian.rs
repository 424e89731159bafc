//! inference::hessian — Hessian-based standard error utilities.
//!
//! Purpose
//! -------
//! Provide a thin wrapper around finite-difference Hessians that converts
//! them into numerically stable standard error estimates. This module
//! handles conversion between `ndarray` and `nalgebra` types and computes
//! classical SEs from the observed information at the MLE.
//!
//! Key behaviors
//! -------------
//! - Call [`compute_hessian`] on a log-likelihood gradient map to obtain the
//!   observed information matrix `J(θ̂)`.
//! - Copy the resulting `ndarray` Hessian into a `nalgebra::DMatrix`
//!   (`fill_dmatrix`) for eigen-based linear algebra.
//! - Compute classical standard errors from the Moore–Penrose pseudoinverse
//!   of `J(θ̂)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - [`compute_hessian`] returns a finite, square `n×n` matrix with
//!   `n = θ̂.len()`. Symmetry is already enforced upstream; this module does
//!   **not** re-symmetrize.
//! - Eigenvalues with magnitude at most [`EIGEN_EPS`] are treated as
//!   numerically nonpositive and ignored when constructing pseudoinverse
//!   directions, inflating SEs along weakly identified directions.
//!
//! Conventions
//! -----------
//! - For the occupancy models, `θ̂` lives on the logit scale and the gradient
//!   map differentiates the total negative log-likelihood, so `J(θ̂)` is the
//!   observed information and the SEs are logit-scale.
//! - No explicit matrix inverse is formed; all computations use symmetric
//!   eigendecomposition with eigenvalue truncation.
use crate::optimization::{
    errors::OptResult, loglik_optimizer::finite_diff::compute_hessian,
    numerical_stability::transformations::EIGEN_EPS,
};
use nalgebra::DMatrix;
use ndarray::{Array1, Array2};

/// Classical standard errors from the observed information.
///
/// Builds the observed information `J(θ̂)` by finite-differencing the
/// gradient map `f` at `theta_hat`, then returns the square roots of the
/// diagonal of the eigen-truncated pseudoinverse `J⁺`.
///
/// # Parameters
/// - `f`: gradient map `θ ↦ g(θ)` of the negative log-likelihood; must be
///   C¹ in a neighborhood of `theta_hat` so that [`compute_hessian`] can
///   succeed.
/// - `theta_hat`: parameter vector `θ̂` at which the observed information is
///   evaluated; its length `n` determines the dimension of the Hessian and
///   of the returned SE vector.
///
/// # Errors
/// Propagates any error from [`compute_hessian`], such as Hessian dimension
/// mismatches or non-finite entries detected by validation.
pub fn calc_standard_errors<F: Fn(&Array1<f64>) -> Array1<f64>>(
    f: &F, theta_hat: &Array1<f64>,
) -> OptResult<Array1<f64>> {
    let n = theta_hat.len();
    let obs_info = compute_hessian(f, theta_hat)?;
    let mut obs_info_nalg = DMatrix::<f64>::zeros(obs_info.nrows(), obs_info.ncols());
    fill_dmatrix(&obs_info, &mut obs_info_nalg);
    Ok(solve_for_se(obs_info_nalg, n))
}

// ---- Helper methods ----

/// Copy an `ndarray` Hessian into a `nalgebra::DMatrix`.
///
/// The copy proceeds column by column, matching the column-major storage of
/// `DMatrix`. No symmetrization is performed here; any asymmetry present in
/// `obs_info` is preserved. Dimension mismatches are programmer errors and
/// surface as out-of-bounds panics.
fn fill_dmatrix(obs_info: &Array2<f64>, obs_info_nalg: &mut DMatrix<f64>) {
    let n = obs_info.ncols();
    for j in 0..n {
        for i in j..n {
            if j == i {
                obs_info_nalg[(i, i)] = obs_info[[i, i]];
            } else {
                obs_info_nalg[(i, j)] = obs_info[[i, j]];
                obs_info_nalg[(j, i)] = obs_info[[j, i]];
            }
        }
    }
}

/// Classical standard errors from a symmetric observed information matrix.
///
/// Uses the symmetric eigendecomposition `J = Q Λ Qᵀ` and the formula
/// `Var(θ̂_i) = Σ_{k: λ_k > EIGEN_EPS} Q[i,k]² / λ_k`, returning
/// `sqrt(Var(θ̂_i))` for each `i`. Eigenvalues at or below [`EIGEN_EPS`] are
/// treated as zero and excluded from the sum.
fn solve_for_se(obs_info_nalg: DMatrix<f64>, n: usize) -> Array1<f64> {
    let eigen_decomp = obs_info_nalg.symmetric_eigen();
    let mut se = Array1::<f64>::zeros(n);
    let q = eigen_decomp.eigenvectors;
    let eigenvals = eigen_decomp.eigenvalues;
    for i in 0..n {
        se[i] = eigenvals
            .iter()
            .enumerate()
            .filter(|(_, lambda)| **lambda > EIGEN_EPS)
            .map(|(k, &lambda)| q[(i, k)] * q[(i, k)] / lambda)
            .sum();
        se[i] = se[i].sqrt();
    }
    se
}
