//! Core building blocks of the dynamic occupancy likelihood.
//!
//! Purpose
//! -------
//! House the validated inputs and the pure numerical kernel of the crate:
//! season/survey layouts, encounter-history containers, the model-space
//! parameter vector with its optimizer-space mapping, the transition and
//! emission matrices, and the forward-algorithm likelihood itself.
//!
//! Layering
//! --------
//! - [`seasons`] and [`data`] validate structure once, at construction.
//! - [`params`] maps between probabilities and the unconstrained θ vector.
//! - [`matrices`] builds the per-evaluation transition/emission structure.
//! - [`forward`] consumes all of the above and produces the scalar negative
//!   log-likelihood; it is the only module with numerical failure modes.
//!
//! Everything here is side-effect free and `Send + Sync`-friendly: a
//! likelihood evaluation owns all of its intermediate state.

pub mod data;
pub mod forward;
pub mod matrices;
pub mod params;
pub mod seasons;
