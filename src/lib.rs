//! dynocc — dynamic (multi-season) occupancy models with an exact HMM likelihood.
//!
//! Purpose
//! -------
//! Provide the building blocks for fitting dynamic site-occupancy models by
//! maximum likelihood: validated encounter-history containers, the exact
//! (hidden-state-marginalized) forward-algorithm likelihood, a seeded data
//! simulator, and an Argmin-backed L-BFGS optimization layer with
//! finite-difference fallbacks and classical standard errors.
//!
//! Key behaviors
//! -------------
//! - Model binary detection histories across `K` seasons × `J` surveys per
//!   site, with colonization/extinction dynamics between seasons and static
//!   occupancy within a season.
//! - Integrate the latent per-season occupancy states out analytically via
//!   the HMM forward recursion; latent states are never materialized as
//!   parameters.
//! - Map the four model probabilities (ψ₁, p, γ, ε) to an unconstrained
//!   logit-scale vector θ for optimization, and back.
//! - Expose a single [`optimization::loglik_optimizer::LogLikelihood`] trait
//!   so occupancy models plug directly into the L-BFGS machinery.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every site history has exactly `K · J` observations; violations are
//!   rejected at construction, before any likelihood work.
//! - All four probabilities live strictly inside (0, 1) in model space.
//! - Likelihood evaluation is a pure function of (θ, data): all transition
//!   and emission structure is rebuilt per call and never shared, so
//!   concurrent evaluations at different θ cannot interfere.
//!
//! Conventions
//! -----------
//! - Parameter vectors and gradients are `ndarray::Array1<f64>`; the
//!   optimizer space layout is `θ = [logit ψ₁, logit p, logit γ, logit ε]`.
//! - The optimizer always *maximizes* a log-likelihood `ℓ(θ)` by minimizing
//!   the cost `c(θ) = −ℓ(θ)`.
//! - Errors are domain-specific enums surfaced through `Result`; library
//!   code never panics on invalid input.
//!
//! Downstream usage
//! ----------------
//! - Construct an [`occupancy::core::data::EncounterData`] (or simulate one
//!   via [`occupancy::simulate`]), build a
//!   [`occupancy::models::dynamic::DynamicOccupancyModel`], and call `fit`.
//! - Callers needing only the objective can use
//!   [`occupancy::core::forward::negative_log_likelihood`] directly.
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each module; the end-to-end
//!   simulate → evaluate → fit → standard-errors pipeline is covered by the
//!   integration tests under `tests/`.

pub mod inference;
pub mod occupancy;
pub mod optimization;
