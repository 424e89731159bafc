//! HMM forward-algorithm likelihood for dynamic occupancy data.
//!
//! Purpose
//! -------
//! Compute the exact negative log-likelihood of encounter data under a
//! dynamic occupancy model by propagating a distribution over the two hidden
//! occupancy states through the per-slot transition matrices and the
//! emission rows of the observed codes. The latent states are integrated out
//! analytically; they never appear as parameters.
//!
//! Key behaviors
//! -------------
//! - [`site_log_likelihood`]: one site's contribution,
//!   `ln(Σ α_N) · multiplicity`, via the forward recursion
//!   `α ← (α · Φ[t]) ∘ B[row(o_{t+1})]` started from
//!   `α = [1 − ψ₁, ψ₁] ∘ B[row(o₁)]`.
//! - [`negative_log_likelihood`]: builds the emission matrix and transition
//!   kernel once per call, sums all site contributions, and returns `−Σ`.
//!
//! Invariants & assumptions
//! ------------------------
//! - The forward vector stays non-negative throughout; if its final sum is
//!   non-positive or non-finite (all paths excluded, e.g. by underflow over
//!   a long history), the call fails with `NumericalDegeneracy` instead of
//!   silently propagating `−∞`.
//! - A site never detected is handled by the same recursion from occasion 1
//!   with `NotDetected` codes throughout; it contributes through its
//!   persistence-without-detection probability and is never dropped.
//! - Evaluation is a pure function of (data, params): per-site passes share
//!   no mutable state and could run in any order; only the final summation
//!   aggregates across sites.
use crate::occupancy::{
    core::{
        data::{EncounterData, SiteHistory},
        matrices::{EmissionMatrix, TransitionKernel},
        params::OccParams,
    },
    errors::{OccError, OccResult},
};

/// One site's log-likelihood contribution via the forward algorithm.
///
/// # Algorithm
/// 1. `α = [1 − ψ₁, ψ₁] ∘ B[row(o₁)]`.
/// 2. For each later occasion `t + 1`:
///    `α ← (α · Φ[t]) ∘ B[row(o_{t+1})]` (vector–matrix product, then
///    Hadamard product with the emission row of the observed code).
/// 3. Contribution `ln(Σα) · multiplicity`.
///
/// # Parameters
/// - `site`: site index, used only for error diagnostics.
/// - `history`: the site's validated observation sequence and multiplicity.
/// - `psi1`: initial occupancy probability ψ₁.
/// - `emission`: emission matrix built from the same parameter set.
/// - `kernel`: per-slot transition structure for the data's layout.
///
/// # Errors
/// [`OccError::NumericalDegeneracy`] if the final path mass `Σα` is
/// non-positive or non-finite.
pub fn site_log_likelihood(
    site: usize, history: &SiteHistory, psi1: f64, emission: &EmissionMatrix,
    kernel: &TransitionKernel,
) -> OccResult<f64> {
    let obs = &history.observations;
    let b = emission.row(obs[0]);
    let mut alpha = [(1.0 - psi1) * b[0], psi1 * b[1]];
    for (slot, &code) in obs.iter().enumerate().skip(1) {
        let phi = kernel.matrix_at(slot - 1);
        let b = emission.row(code);
        let propagated = [
            alpha[0] * phi[0][0] + alpha[1] * phi[1][0],
            alpha[0] * phi[0][1] + alpha[1] * phi[1][1],
        ];
        alpha = [propagated[0] * b[0], propagated[1] * b[1]];
    }
    let path_mass = alpha[0] + alpha[1];
    if !path_mass.is_finite() || path_mass <= 0.0 {
        return Err(OccError::NumericalDegeneracy { site, path_mass });
    }
    Ok(path_mass.ln() * f64::from(history.multiplicity))
}

/// Total negative log-likelihood of `data` at `params`.
///
/// Builds the emission matrix and transition kernel once (rejecting any
/// out-of-domain probability before per-site work), runs the forward pass
/// over every site, and returns `−Σ` of the contributions.
///
/// # Errors
/// - [`OccError::ParameterDomain`] from the matrix builders.
/// - [`OccError::NumericalDegeneracy`] from the first degenerate site.
pub fn negative_log_likelihood(data: &EncounterData, params: &OccParams) -> OccResult<f64> {
    let emission = EmissionMatrix::new(params)?;
    let kernel = TransitionKernel::new(params, *data.layout())?;
    let mut total = 0.0;
    for (site, history) in data.sites().iter().enumerate() {
        total += site_log_likelihood(site, history, params.psi1, &emission, &kernel)?;
    }
    Ok(-total)
}
