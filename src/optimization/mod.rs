//! Optimization layer: log-likelihood maximization and numerical guards.
//!
//! Purpose
//! -------
//! Host the model-agnostic machinery for fitting by maximum likelihood:
//! the Argmin-backed L-BFGS front-end in [`loglik_optimizer`], the guarded
//! transforms and shared numeric constants in [`numerical_stability`], and
//! the optimizer error type in [`errors`].
//!
//! The occupancy modules depend on this layer; nothing here depends on them
//! except the error conversion from the domain error type.

pub mod errors;
pub mod loglik_optimizer;
pub mod numerical_stability;

// ---- Re-exports ----
pub use errors::{OptError, OptResult};

/// Convenience re-exports for optimizer consumers.
pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::loglik_optimizer::prelude::*;
    pub use super::numerical_stability::prelude::*;
}
