//! Dynamic occupancy likelihoods and supporting machinery.
//!
//! Purpose
//! -------
//! Everything specific to the occupancy domain lives here: validated
//! encounter data, the forward-algorithm likelihood kernel, the
//! optimizer-facing model types, the data simulator, and the domain error
//! type. The optimizer and inference layers are model-agnostic and live
//! outside this module.
//!
//! Layout
//! ------
//! - [`core`]: layouts, data containers, parameters, matrices, and the
//!   forward pass.
//! - [`models`]: concrete fitted models (currently the dynamic model).
//! - [`simulate`]: seeded data generation with matching semantics.
//! - [`errors`]: the domain error enum shared by all of the above.

pub mod core;
pub mod errors;
pub mod models;
pub mod simulate;

// ---- Re-exports ----
pub use self::core::{
    data::{EncounterData, Observation, SiteHistory},
    forward::negative_log_likelihood,
    params::{OccParams, THETA_LEN},
    seasons::SeasonLayout,
};
pub use errors::{OccError, OccResult};
pub use models::DynamicOccupancyModel;

/// Convenience re-exports for typical likelihood work.
pub mod prelude {
    pub use super::core::{
        data::{EncounterData, Observation, SiteHistory},
        forward::negative_log_likelihood,
        params::{OccParams, THETA_LEN},
        seasons::SeasonLayout,
    };
    pub use super::errors::{OccError, OccResult};
    pub use super::models::prelude::*;
    pub use super::simulate::{SimConfig, SimulatedData, simulate};
}
