//! Transition and emission structure for the occupancy HMM.
//!
//! Purpose
//! -------
//! Build the 2×2 emission matrix `B` and the per-slot transition matrices
//! `Φ[t]` consumed by the forward recursion. Both are immutable, per-call
//! values owned by the evaluation: nothing here is global or shared, so
//! concurrent likelihood evaluations at different parameter points cannot
//! interfere.
//!
//! Key behaviors
//! -------------
//! - [`EmissionMatrix`]: `row(obs)` returns the per-state observation
//!   probabilities for an observation code;
//!   `row(NotDetected) = [1, 1 − p]`, `row(Detected) = [0, p]`
//!   (column = hidden state: 0 unoccupied, 1 occupied).
//! - [`TransitionKernel`]: `matrix_at(slot)` returns the identity inside a
//!   season and the colonization/extinction matrix
//!   `[[1 − γ, γ], [ε, 1 − ε]]` across season boundaries (row = state at the
//!   earlier occasion).
//!
//! Invariants & assumptions
//! ------------------------
//! - Probabilities are re-validated at build time; any value outside (0, 1)
//!   fails with `ParameterDomain` before per-site work starts.
//! - The slot partition (within + between = N − 1) is structural in
//!   [`SeasonLayout`] and therefore holds for every kernel built from one.
use crate::occupancy::{
    core::{data::Observation, params::OccParams, seasons::SeasonLayout},
    errors::{OccError, OccResult},
};

/// 2×2 state-transition matrix, row = state at occasion `t`,
/// column = state at occasion `t + 1`.
pub type StateMatrix = [[f64; 2]; 2];

const IDENTITY: StateMatrix = [[1.0, 0.0], [0.0, 1.0]];

/// Emission matrix `B`, row = observation code, column = hidden state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionMatrix {
    rows: [[f64; 2]; 2],
}

impl EmissionMatrix {
    /// Build the emission matrix for detection probability `p`.
    ///
    /// # Errors
    /// [`OccError::ParameterDomain`] if `p` lies outside (0, 1).
    pub fn new(params: &OccParams) -> OccResult<Self> {
        let p = params.p_det;
        if !p.is_finite() || p <= 0.0 || p >= 1.0 {
            return Err(OccError::ParameterDomain { name: "p_det", value: p });
        }
        Ok(EmissionMatrix { rows: [[1.0, 1.0 - p], [0.0, p]] })
    }

    /// Per-state observation probabilities for `obs`:
    /// `[P(obs | unoccupied), P(obs | occupied)]`.
    pub fn row(&self, obs: Observation) -> &[f64; 2] {
        &self.rows[obs.emission_row()]
    }
}

/// Per-evaluation transition structure over all `N − 1` slots.
///
/// Within-season slots carry the identity (occupancy is static inside a
/// season); between-season slots carry the colonization/extinction dynamics.
/// The kernel stores the layout and the single seasonal matrix rather than
/// materializing `N − 1` copies; `matrix_at` resolves each slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionKernel {
    layout: SeasonLayout,
    seasonal: StateMatrix,
}

impl TransitionKernel {
    /// Build the transition kernel for `params` under `layout`.
    ///
    /// # Errors
    /// [`OccError::ParameterDomain`] if γ or ε lies outside (0, 1).
    pub fn new(params: &OccParams, layout: SeasonLayout) -> OccResult<Self> {
        let gamma = params.gamma;
        let epsilon = params.epsilon;
        if !gamma.is_finite() || gamma <= 0.0 || gamma >= 1.0 {
            return Err(OccError::ParameterDomain { name: "gamma", value: gamma });
        }
        if !epsilon.is_finite() || epsilon <= 0.0 || epsilon >= 1.0 {
            return Err(OccError::ParameterDomain { name: "epsilon", value: epsilon });
        }
        let seasonal = [[1.0 - gamma, gamma], [epsilon, 1.0 - epsilon]];
        Ok(TransitionKernel { layout, seasonal })
    }

    /// Transition matrix for slot `slot` (between occasions `slot` and
    /// `slot + 1`). Callers must ensure `slot < layout.occasions() − 1`.
    pub fn matrix_at(&self, slot: usize) -> &StateMatrix {
        if self.layout.between_seasons(slot) { &self.seasonal } else { &IDENTITY }
    }

    /// The layout this kernel was built for.
    pub fn layout(&self) -> &SeasonLayout {
        &self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> OccParams {
        OccParams::new(0.6, 0.7, 0.3, 0.5).expect("parameters should be in domain")
    }

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Emission rows against the closed-form entries.
    // - Identity within seasons regardless of (γ, ε); seasonal rows sum to 1.
    // - Domain rejection at build time.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // The emission rows must match B exactly: row 0 = [1, 1 − p],
    // row 1 = [0, p].
    fn emission_rows_match_closed_form() {
        let emission = EmissionMatrix::new(&params()).expect("emission build should succeed");
        assert_eq!(emission.row(Observation::NotDetected), &[1.0, 1.0 - 0.7]);
        assert_eq!(emission.row(Observation::Detected), &[0.0, 0.7]);
    }

    #[test]
    // Purpose
    // -------
    // Within-season transition matrices equal the identity regardless of the
    // colonization/extinction values; between-season rows are proper
    // probability distributions.
    //
    // Given
    // -----
    // - A 3-season × 2-survey layout and several (γ, ε) pairs.
    //
    // Expect
    // ------
    // - `matrix_at` returns the identity on within-season slots.
    // - Every seasonal row sums to 1 within 1e-15.
    fn within_identity_and_seasonal_rows_sum_to_one() {
        let layout = SeasonLayout::new(3, 2).expect("layout should be valid");
        for (gamma, epsilon) in [(0.3, 0.5), (0.01, 0.99), (0.8, 0.2)] {
            let p = OccParams::new(0.6, 0.7, gamma, epsilon)
                .expect("parameters should be in domain");
            let kernel = TransitionKernel::new(&p, layout).expect("kernel build should succeed");
            for slot in 0..layout.occasions() - 1 {
                let phi = kernel.matrix_at(slot);
                if layout.between_seasons(slot) {
                    for row in phi {
                        assert!((row[0] + row[1] - 1.0).abs() < 1e-15);
                    }
                    assert_eq!(phi[0][1], gamma);
                    assert_eq!(phi[1][0], epsilon);
                } else {
                    assert_eq!(phi, &[[1.0, 0.0], [0.0, 1.0]]);
                }
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Matrix builders re-validate probabilities and fail before any
    // per-site computation.
    //
    // Expect
    // ------
    // - `ParameterDomain` naming the offending parameter for boundary values
    //   smuggled past the `OccParams` constructor.
    fn builders_reject_boundary_probabilities() {
        let mut bad = params();
        bad.p_det = 1.0;
        assert_eq!(
            EmissionMatrix::new(&bad),
            Err(OccError::ParameterDomain { name: "p_det", value: 1.0 })
        );

        let layout = SeasonLayout::new(2, 2).expect("layout should be valid");
        let mut bad = params();
        bad.gamma = 0.0;
        assert_eq!(
            TransitionKernel::new(&bad, layout),
            Err(OccError::ParameterDomain { name: "gamma", value: 0.0 })
        );
        let mut bad = params();
        bad.epsilon = f64::NAN;
        assert!(TransitionKernel::new(&bad, layout).is_err());
    }
}
