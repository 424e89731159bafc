//! Numerical stability utilities.
//!
//! Provides safe implementations of the logistic/logit transform pair used to
//! map unconstrained optimizer parameters into probabilities and back. Both
//! directions are prone to overflow or catastrophic cancellation in naïve
//! form; the functions here follow guarded strategies similar to those in
//! major ML libraries, using explicit branch cutoffs to keep `f64`
//! arithmetic in a well-conditioned regime.
//!
//! # Provided items
//! - [`LOGIT_EPS`]: clamp for probabilities before taking logits, keeping
//!   back-transformed values strictly inside (0, 1).
//! - [`EIGEN_EPS`]: eigenvalue truncation threshold for pseudoinverse-based
//!   standard errors.
//! - [`GENERAL_TOL`]: generic absolute tolerance for closeness checks.
//! - [`safe_logistic(x)`]: stable `1 / (1 + exp(−x))`, mapping ℝ → (0, 1).
//! - [`safe_logit(p)`]: stable `ln(p / (1 − p))`, mapping (0, 1) → ℝ.
//!
//! # Rationale
//! Occupancy, detection, colonization, and extinction probabilities are
//! optimized on the logit scale; every likelihood evaluation passes through
//! these transforms, so they must behave sensibly even for the extreme θ
//! values a line search can produce.

/// Clamp applied to probabilities before logit transforms and after
/// logistic back-transforms in optimizer code.
///
/// Keeping probabilities inside `[LOGIT_EPS, 1 − LOGIT_EPS]` guarantees that
/// `ln(p)` and `ln(1 − p)` stay finite for every finite optimizer iterate.
pub const LOGIT_EPS: f64 = 1e-12;

/// Eigenvalues with magnitude at most this threshold are treated as zero
/// when forming pseudoinverse directions for standard errors.
pub const EIGEN_EPS: f64 = 1e-10;

/// Generic absolute tolerance for closeness checks in numerical code.
pub const GENERAL_TOL: f64 = 1e-8;

/// Numerically stable logistic function: `logistic(x) = 1 / (1 + exp(−x))`.
///
/// Uses the standard branch split so the exponential argument is always
/// non-positive, avoiding overflow for large `|x|`:
///
/// - For `x ≥ 0`: `1 / (1 + exp(−x))`.
/// - For `x < 0`: `exp(x) / (1 + exp(x))`.
///
/// # Parameters
/// - `x`: real input (logit-scale parameter).
///
/// # Returns
/// - `logistic(x)` in `[0, 1]`; exact 0 or 1 only when `exp(∓x)` underflows.
pub fn safe_logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Stable logit on (0, 1): `logit(p) = ln(p / (1 − p))`.
///
/// Uses `ln_1p` for the complement so small `p` lose no precision:
/// `logit(p) = ln(p) − ln_1p(−p)`.
///
/// # Parameters
/// - `p`: a probability strictly inside (0, 1). Callers are expected to
///   enforce the domain; out-of-domain input yields `±∞` or NaN.
///
/// # Returns
/// - `x` such that `safe_logistic(x) = p` up to floating-point rounding.
pub fn safe_logit(p: f64) -> f64 {
    p.ln() - (-p).ln_1p()
}
