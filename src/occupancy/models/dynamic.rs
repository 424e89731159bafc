//! Dynamic occupancy model: optimizer-facing objective and fitting.
//!
//! This module wires the forward-algorithm likelihood to the
//! [`LogLikelihood`] trait so the model plugs directly into the Argmin-backed
//! L-BFGS machinery. Parameters live in unconstrained space,
//! `θ = [logit ψ₁, logit p, logit γ, logit ε]`; each evaluation maps θ into
//! model space, rebuilds the per-call transition/emission structure, and
//! returns `ℓ(θ) = −NLL`. No analytic gradient is provided; the optimizer
//! layer falls back to robust finite differences.
//!
//! Degenerate parameter regions (a site's forward path mass underflowing to
//! zero) are surfaced to the optimizer as a large finite penalty value
//! instead of an error, so the line search can backtrack out of the region
//! rather than aborting the whole run. Any other evaluation failure is a
//! genuine error and propagates.
use crate::{
    inference::hessian::calc_standard_errors,
    occupancy::{
        core::{
            data::EncounterData,
            forward::negative_log_likelihood,
            params::{OccParams, validate_theta},
        },
        errors::OccError,
    },
    optimization::{
        errors::{OptError, OptResult},
        loglik_optimizer::{Cost, Grad, LogLikelihood, MLEOptions, OptimOutcome, Theta, maximize},
    },
};
use finitediff::FiniteDiff;
use ndarray::Array1;

/// Log-likelihood stand-in for parameter regions where the forward path mass
/// degenerates. Large enough in magnitude that any non-degenerate region is
/// preferred, finite so the line search can still compare and backtrack.
pub const DEGENERACY_PENALTY: f64 = -1e12;

/// Dynamic (multi-season) occupancy model fitted by maximum likelihood.
///
/// Holds the optimizer configuration and, after [`fit`](Self::fit), the raw
/// optimization outcome plus the fitted parameters materialized back in
/// model space.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicOccupancyModel {
    /// Optimizer options (tolerances, line search, verbosity).
    pub options: MLEOptions,
    /// Fit results (populated after `fit`).
    pub results: Option<OptimOutcome>,
    /// Fitted parameters (populated after `fit`).
    pub fitted_params: Option<OccParams>,
}

impl DynamicOccupancyModel {
    /// Construct an unfitted model with the given optimizer options.
    pub fn new(options: MLEOptions) -> Self {
        DynamicOccupancyModel { options, results: None, fitted_params: None }
    }

    /// Fit the model by maximum likelihood (consumes `theta0`).
    ///
    /// ## Steps
    /// 1. Run L-BFGS via [`maximize`] per `self.options`, moving `theta0`
    ///    into the executor.
    /// 2. Store the optimizer outcome in `self.results`.
    /// 3. Materialize `θ̂` back into model space via
    ///    [`OccParams::from_theta`] and store it in `self.fitted_params`.
    ///
    /// ## Errors
    /// Propagates validation errors from `check`, solver errors from the
    /// optimizer layer, and mapping errors from `from_theta`.
    pub fn fit(&mut self, theta0: Theta, data: &EncounterData) -> OptResult<()> {
        let opts = self.options.clone();
        let outcome = maximize(self, theta0, data, &opts)?;
        self.fitted_params = Some(OccParams::from_theta(outcome.theta_hat.view())?);
        self.results = Some(outcome);
        Ok(())
    }

    /// Classical standard errors of `θ̂` from the observed information.
    ///
    /// Builds a finite-difference gradient of the total negative
    /// log-likelihood around `θ̂`, differentiates it again into the observed
    /// information matrix, and returns the square roots of the diagonal of
    /// its eigen-truncated pseudoinverse. Errors inside the evaluation
    /// closure surface as NaN entries and are caught by Hessian validation.
    ///
    /// Standard errors are on the logit (θ) scale; callers reporting on the
    /// probability scale should apply the delta method with the logistic
    /// derivative.
    ///
    /// # Errors
    /// - [`OptError::ModelNotFitted`] before a successful `fit`.
    /// - Any Hessian validation error from the inference layer.
    pub fn standard_errors(&self, data: &EncounterData) -> OptResult<Array1<f64>> {
        let outcome = self.results.as_ref().ok_or(OptError::ModelNotFitted)?;
        let nll = |theta: &Theta| -> f64 {
            match OccParams::from_theta(theta.view()) {
                Ok(params) => match negative_log_likelihood(data, &params) {
                    Ok(value) => value,
                    Err(_) => f64::NAN,
                },
                Err(_) => f64::NAN,
            }
        };
        let grad_fn = |theta: &Theta| -> Grad { theta.central_diff(&nll) };
        calc_standard_errors(&grad_fn, &outcome.theta_hat)
    }
}

impl LogLikelihood for DynamicOccupancyModel {
    type Data = EncounterData;

    /// Log-likelihood `ℓ(θ) = −NLL(θ)` at the unconstrained vector `θ`.
    ///
    /// # Steps
    /// 1. Map θ → (ψ₁, p, γ, ε) with the guarded, clamped logistic.
    /// 2. Build the per-call emission matrix and transition kernel.
    /// 3. Run the forward pass over all sites.
    ///
    /// A `NumericalDegeneracy` from the forward pass becomes the finite
    /// [`DEGENERACY_PENALTY`] so the optimizer can backtrack; all other
    /// errors propagate.
    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost> {
        let params = OccParams::from_theta(theta.view())?;
        match negative_log_likelihood(data, &params) {
            Ok(nll) => Ok(-nll),
            Err(OccError::NumericalDegeneracy { .. }) => Ok(DEGENERACY_PENALTY),
            Err(err) => Err(err.into()),
        }
    }

    /// Validate an unconstrained parameter vector `θ`.
    ///
    /// Checks `θ.len() == 4` and finiteness of all entries; the encounter
    /// data was already validated at construction.
    fn check(&self, theta: &Theta, _data: &Self::Data) -> OptResult<()> {
        validate_theta(theta.view())?;
        Ok(())
    }
}
