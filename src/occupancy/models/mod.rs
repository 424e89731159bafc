//! Concrete occupancy models built on the core likelihood.
//!
//! Currently a single member: the dynamic (multi-season) model in
//! [`dynamic`]. Single-season occupancy is the `seasons = 1` special case of
//! the same machinery, so it does not get a module of its own.

pub mod dynamic;

// ---- Re-exports ----
pub use dynamic::DynamicOccupancyModel;

/// Convenience re-exports for model fitting.
pub mod prelude {
    pub use super::dynamic::{DEGENERACY_PENALTY, DynamicOccupancyModel};
}
