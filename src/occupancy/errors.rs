//! Error surface for the occupancy layer.
//!
//! This module centralizes every failure mode of encounter-data
//! construction and likelihood evaluation:
//!
//! - **Input shape**: season/survey layout or history inconsistencies,
//!   rejected at setup before any per-site computation.
//! - **Parameter domain**: a probability outside the open unit interval,
//!   rejected when the transition/emission matrices are built.
//! - **Numerical degeneracy**: a forward-path mass that underflows to zero,
//!   reported with the offending site instead of propagating `−∞` silently.
//! - **θ-space**: wrong length or non-finite entries in the unconstrained
//!   optimizer vector.
//!
//! All errors are fatal to the current evaluation call; there are no partial
//! results. The optimizer layer converts these into
//! [`OptError`](crate::optimization::errors::OptError) via `From`.

/// Result alias for occupancy-layer operations.
pub type OccResult<T> = Result<T, OccError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OccError {
    // ---- Input shape ----
    /// A layout must have at least one season.
    ZeroSeasons,

    /// A layout must have at least one survey per season.
    ZeroSurveys,

    /// At least one site history is required.
    EmptyHistorySet,

    /// A site history length does not match the layout's occasion count.
    HistoryLengthMismatch {
        site: usize,
        expected: usize,
        actual: usize,
    },

    /// Multiplicity must be at least one.
    InvalidMultiplicity {
        site: usize,
    },

    // ---- Parameter domain ----
    /// A model probability fell outside the open interval (0, 1).
    ParameterDomain {
        name: &'static str,
        value: f64,
    },

    // ---- Numerical ----
    /// The forward vector summed to a non-positive or non-finite mass.
    NumericalDegeneracy {
        site: usize,
        path_mass: f64,
    },

    // ---- Theta space ----
    /// θ length mismatch for the four-parameter model.
    ThetaLengthMismatch {
        expected: usize,
        actual: usize,
    },

    /// θ entries must be finite.
    InvalidThetaInput {
        index: usize,
        value: f64,
    },

    // ---- Model state ----
    /// Fit results were requested before `fit` succeeded.
    ModelNotFitted,
}

impl std::error::Error for OccError {}

impl std::fmt::Display for OccError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OccError::ZeroSeasons => {
                write!(f, "Season layout must contain at least one season")
            }
            OccError::ZeroSurveys => {
                write!(f, "Season layout must contain at least one survey per season")
            }
            OccError::EmptyHistorySet => {
                write!(f, "Encounter data must contain at least one site history")
            }
            OccError::HistoryLengthMismatch { site, expected, actual } => {
                write!(
                    f,
                    "Site {site}: history length {actual} does not match the layout's {expected} occasions"
                )
            }
            OccError::InvalidMultiplicity { site } => {
                write!(f, "Site {site}: multiplicity must be at least one")
            }
            OccError::ParameterDomain { name, value } => {
                write!(f, "Parameter {name} = {value} is outside the open interval (0, 1)")
            }
            OccError::NumericalDegeneracy { site, path_mass } => {
                write!(
                    f,
                    "Site {site}: forward path mass {path_mass} is degenerate (all paths excluded)"
                )
            }
            OccError::ThetaLengthMismatch { expected, actual } => {
                write!(f, "Theta length mismatch: expected {expected}, actual {actual}")
            }
            OccError::InvalidThetaInput { index, value } => {
                write!(f, "Invalid theta input at index {index}: {value}, must be finite")
            }
            OccError::ModelNotFitted => {
                write!(f, "Model has not been fitted yet")
            }
        }
    }
}
