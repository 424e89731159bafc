//! Dynamic occupancy parameterization and the optimizer-space mapping.
//!
//! This module provides the **model-space** parameter container [`OccParams`]
//! and a **numerically stable mapping** between model space and the
//! unconstrained **optimizer-space vector** θ (`ndarray::Array1<f64>`).
//!
//! ## Mapping conventions
//! - `θ = [logit ψ₁, logit p, logit γ, logit ε]`, length [`THETA_LEN`].
//! - The forward map [`OccParams::from_theta`] applies the guarded logistic
//!   and clamps each probability to `[LOGIT_EPS, 1 − LOGIT_EPS]`, so every
//!   finite θ maps into the open unit interval and the likelihood stays
//!   defined for all optimizer iterates.
//! - The inverse map [`OccParams::to_theta`] uses the guarded logit; the
//!   round trip is exact to floating-point tolerance for probabilities away
//!   from the clamp.
//!
//! ## Invariants validated by constructors
//! - `ψ₁, p, γ, ε` all strictly inside (0, 1); violations surface as
//!   [`ParameterDomain`](crate::occupancy::errors::OccError::ParameterDomain)
//!   naming the offending parameter.
use crate::{
    occupancy::errors::{OccError, OccResult},
    optimization::numerical_stability::transformations::{LOGIT_EPS, safe_logistic, safe_logit},
};
use ndarray::{Array1, ArrayView1};

/// Length of the optimizer-space parameter vector θ.
pub const THETA_LEN: usize = 4;

/// Constrained **model-space** parameters of a dynamic occupancy model.
///
/// All four probabilities are validated at construction; use this type to
/// build transition/emission matrices and evaluate the forward likelihood.
///
/// See [`OccParams::from_theta`] for the optimizer-space mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OccParams {
    /// Initial occupancy probability ψ₁ ∈ (0, 1).
    pub psi1: f64,
    /// Per-survey detection probability p ∈ (0, 1).
    pub p_det: f64,
    /// Colonization probability γ ∈ (0, 1).
    pub gamma: f64,
    /// Extinction probability ε ∈ (0, 1).
    pub epsilon: f64,
}

impl OccParams {
    /// Create validated model-space parameters.
    ///
    /// Validates that each of `psi1`, `p_det`, `gamma`, `epsilon` is finite
    /// and strictly inside (0, 1).
    ///
    /// # Errors
    /// [`OccError::ParameterDomain`] naming the first offending parameter.
    pub fn new(psi1: f64, p_det: f64, gamma: f64, epsilon: f64) -> OccResult<Self> {
        validate_probability("psi1", psi1)?;
        validate_probability("p_det", p_det)?;
        validate_probability("gamma", gamma)?;
        validate_probability("epsilon", epsilon)?;
        Ok(OccParams { psi1, p_det, gamma, epsilon })
    }

    /// Build validated model-space parameters from an optimizer-space vector θ.
    ///
    /// ### Inputs
    /// - `theta`: unconstrained vector with layout
    ///   `θ = [logit ψ₁, logit p, logit γ, logit ε]`.
    ///
    /// ### Behavior
    /// 1. Validates `theta.len() == THETA_LEN` and finiteness of all entries.
    /// 2. Applies the guarded logistic to each coordinate.
    /// 3. Clamps each probability to `[LOGIT_EPS, 1 − LOGIT_EPS]`, so even
    ///    extreme line-search iterates map to a valid model.
    ///
    /// ### Errors
    /// - [`OccError::ThetaLengthMismatch`] for wrong length.
    /// - [`OccError::InvalidThetaInput`] for NaN or infinite entries.
    pub fn from_theta(theta: ArrayView1<f64>) -> OccResult<Self> {
        validate_theta(theta)?;
        Ok(OccParams {
            psi1: clamped_logistic(theta[0]),
            p_det: clamped_logistic(theta[1]),
            gamma: clamped_logistic(theta[2]),
            epsilon: clamped_logistic(theta[3]),
        })
    }

    /// Map model-space parameters to the **optimizer-space** vector θ.
    ///
    /// Layout: `θ = [logit ψ₁, logit p, logit γ, logit ε]`. Assumes this
    /// instance already satisfies the model-space invariants, so every logit
    /// is finite.
    pub fn to_theta(&self) -> Array1<f64> {
        Array1::from(vec![
            safe_logit(self.psi1),
            safe_logit(self.p_det),
            safe_logit(self.gamma),
            safe_logit(self.epsilon),
        ])
    }
}

/// Validate an unconstrained optimizer vector for the four-parameter model.
///
/// Checks:
/// - `theta.len() == THETA_LEN`
/// - every element is finite (`NaN` or `±∞` are rejected)
///
/// # Errors
/// - [`OccError::ThetaLengthMismatch`] if the length differs.
/// - [`OccError::InvalidThetaInput`] with the first offending index/value.
pub fn validate_theta(theta: ArrayView1<f64>) -> OccResult<()> {
    if theta.len() != THETA_LEN {
        return Err(OccError::ThetaLengthMismatch { expected: THETA_LEN, actual: theta.len() });
    }
    for (index, &value) in theta.iter().enumerate() {
        if !value.is_finite() {
            return Err(OccError::InvalidThetaInput { index, value });
        }
    }
    Ok(())
}

fn validate_probability(name: &'static str, value: f64) -> OccResult<()> {
    if !value.is_finite() || value <= 0.0 || value >= 1.0 {
        return Err(OccError::ParameterDomain { name, value });
    }
    Ok(())
}

fn clamped_logistic(x: f64) -> f64 {
    safe_logistic(x).clamp(LOGIT_EPS, 1.0 - LOGIT_EPS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Domain validation in `OccParams::new`.
    // - θ validation (length, finiteness) in `from_theta`.
    // - The model-space ↔ optimizer-space round trip.
    // - Clamping of extreme θ into the open unit interval.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Out-of-domain probabilities are rejected with the parameter name.
    //
    // Given
    // -----
    // - Boundary and out-of-range values for each of the four parameters.
    //
    // Expect
    // ------
    // - `ParameterDomain` naming the offending parameter.
    fn new_rejects_out_of_domain_probabilities() {
        assert_eq!(
            OccParams::new(0.0, 0.5, 0.5, 0.5),
            Err(OccError::ParameterDomain { name: "psi1", value: 0.0 })
        );
        assert_eq!(
            OccParams::new(0.5, 1.0, 0.5, 0.5),
            Err(OccError::ParameterDomain { name: "p_det", value: 1.0 })
        );
        assert_eq!(
            OccParams::new(0.5, 0.5, -0.1, 0.5),
            Err(OccError::ParameterDomain { name: "gamma", value: -0.1 })
        );
        assert_eq!(
            OccParams::new(0.5, 0.5, 0.5, f64::NAN).is_err(),
            true,
            "NaN epsilon should be rejected"
        );
    }

    #[test]
    // Purpose
    // -------
    // `from_theta` enforces the θ contract before transforming.
    //
    // Expect
    // ------
    // - Wrong length → `ThetaLengthMismatch`.
    // - Non-finite entry → `InvalidThetaInput` with its index.
    fn from_theta_validates_input() {
        let short = array![0.0, 0.0, 0.0];
        assert_eq!(
            OccParams::from_theta(short.view()),
            Err(OccError::ThetaLengthMismatch { expected: THETA_LEN, actual: 3 })
        );

        let bad = array![0.0, f64::INFINITY, 0.0, 0.0];
        assert_eq!(
            OccParams::from_theta(bad.view()),
            Err(OccError::InvalidThetaInput { index: 1, value: f64::INFINITY })
        );
    }

    #[test]
    // Purpose
    // -------
    // to_theta then from_theta recovers the model-space parameters within
    // floating-point tolerance.
    //
    // Given
    // -----
    // - A typical parameter set away from the clamp boundaries.
    //
    // Expect
    // ------
    // - Each recovered probability within 1e-12 of the original.
    fn theta_round_trip_recovers_parameters() {
        let params =
            OccParams::new(0.6, 0.7, 0.3, 0.5).expect("parameters should be in domain");
        let theta = params.to_theta();
        let back = OccParams::from_theta(theta.view()).expect("round trip should succeed");
        assert!((back.psi1 - params.psi1).abs() < 1e-12);
        assert!((back.p_det - params.p_det).abs() < 1e-12);
        assert!((back.gamma - params.gamma).abs() < 1e-12);
        assert!((back.epsilon - params.epsilon).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Extreme but finite θ values must map into the open unit interval so
    // the likelihood stays defined during aggressive line searches.
    //
    // Given
    // -----
    // - θ entries of ±500, where the raw logistic saturates to exactly 0/1.
    //
    // Expect
    // ------
    // - All probabilities strictly inside (0, 1).
    fn from_theta_clamps_extreme_iterates() {
        let extreme = array![500.0, -500.0, 500.0, -500.0];
        let params = OccParams::from_theta(extreme.view()).expect("clamped map should succeed");
        for value in [params.psi1, params.p_det, params.gamma, params.epsilon] {
            assert!(value > 0.0 && value < 1.0, "probability {value} escaped (0, 1)");
        }
    }
}
