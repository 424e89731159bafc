//! Post-fit inference utilities.
//!
//! Currently one member: [`hessian`], which turns finite-difference observed
//! information matrices into classical standard errors via eigen-truncated
//! pseudoinverses.

pub mod hessian;

// ---- Re-exports ----
pub use hessian::calc_standard_errors;
