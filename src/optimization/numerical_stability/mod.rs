//! numerical_stability — numerically robust parameter transforms.
//!
//! Purpose
//! -------
//! Collect the guarded scalar transforms and shared numeric tolerances used
//! to map unconstrained optimizer parameters into probabilities for dynamic
//! occupancy models. Centralizing these keeps clamping and cutoff behavior
//! consistent between the likelihood, optimizer, and inference layers.
//!
//! Key behaviors
//! -------------
//! - Provide the stable logistic/logit pair ([`safe_logistic`],
//!   [`safe_logit`]) for the (0, 1) ↔ ℝ mapping of ψ₁, p, γ, and ε.
//! - Expose shared tolerances ([`LOGIT_EPS`], [`EIGEN_EPS`],
//!   [`GENERAL_TOL`]) so downstream modules agree on clamping and
//!   truncation thresholds.
//!
//! Invariants & assumptions
//! ------------------------
//! - Transforms assume finite `f64` inputs; domain validation (probability
//!   bounds, θ length) is enforced in the occupancy and optimizer layers,
//!   not here.
//! - This module never logs, performs I/O, or touches global state; it is
//!   pure numerical helpers suitable for tight inner loops.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`transformations`] cover agreement with naïve formulas
//!   on safe grids, round-trip identities, and tail saturation without
//!   overflow.

pub mod transformations;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::transformations::{
    EIGEN_EPS, GENERAL_TOL, LOGIT_EPS, safe_logistic, safe_logit,
};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::transformations::{EIGEN_EPS, GENERAL_TOL, LOGIT_EPS, safe_logistic, safe_logit};
}
