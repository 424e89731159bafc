//! Seeded simulation of dynamic occupancy data.
//!
//! Purpose
//! -------
//! Generate synthetic encounter histories with exactly the transition and
//! emission semantics of the forward likelihood: initial occupancy from ψ₁,
//! season-to-season dynamics from (γ, ε), and per-survey detections from p
//! at occupied sites only. Used for recovery studies, benchmarking, and the
//! integration tests.
//!
//! Key behaviors
//! -------------
//! - Latent occupancy per site/season: `z₁ ~ Bern(ψ₁)`,
//!   `z_{k+1} ~ Bern(1 − ε)` if occupied, `Bern(γ)` if not.
//! - Detections per site/season/survey: `y ~ Bern(p)` when occupied,
//!   always 0 when unoccupied.
//! - Deterministic given the seed: the generator is a `Pcg64` seeded with
//!   `seed_from_u64`, so the same configuration reproduces the same data on
//!   every platform.
//!
//! Downstream usage
//! ----------------
//! - [`simulate`] returns both the array views useful for inspection (the
//!   latent occupancy matrix and the 3-D detection array) and the flattened
//!   [`EncounterData`] consumed by the likelihood and the optimizer.
use crate::occupancy::{
    core::{
        data::{EncounterData, Observation, SiteHistory},
        params::OccParams,
        seasons::SeasonLayout,
    },
    errors::OccResult,
};
use ndarray::{Array2, Array3};
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Configuration of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    /// Number of sites, `R`.
    pub sites: usize,
    /// Season/survey structure shared by all sites.
    pub layout: SeasonLayout,
    /// Generating parameters (validated at construction).
    pub params: OccParams,
    /// Master seed for the deterministic generator.
    pub seed: u64,
}

/// Output of [`simulate`]: latent states, raw detections, and the flattened
/// encounter data.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedData {
    /// Latent occupancy indicators, `sites × seasons` (1 = occupied).
    pub occupancy: Array2<u8>,
    /// Detection indicators, `sites × seasons × surveys`.
    pub detections: Array3<u8>,
    /// Flattened site-history matrix consumed by the likelihood.
    pub data: EncounterData,
}

/// Simulate encounter histories under `config`.
///
/// # Behavior
/// Draws the latent occupancy chain and the conditional detections site by
/// site, then flattens each site's `seasons × surveys` detection block into
/// a season-major history (occasion `k · J + j` is survey `j` of season `k`),
/// matching the layout convention of the forward pass.
///
/// # Errors
/// Propagates [`EncounterData::new`] validation errors; these cannot occur
/// for a well-formed `SimConfig` since histories are generated at exactly
/// `layout.occasions()` observations, but the contract is kept explicit.
pub fn simulate(config: &SimConfig) -> OccResult<SimulatedData> {
    let seasons = config.layout.seasons();
    let surveys = config.layout.surveys();
    let p = &config.params;
    let mut rng = Pcg64::seed_from_u64(config.seed);

    let mut occupancy = Array2::<u8>::zeros((config.sites, seasons));
    let mut detections = Array3::<u8>::zeros((config.sites, seasons, surveys));
    let mut histories = Vec::with_capacity(config.sites);

    for site in 0..config.sites {
        let mut occupied = rng.gen_bool(p.psi1);
        let mut observations = Vec::with_capacity(config.layout.occasions());
        for season in 0..seasons {
            if season > 0 {
                let stay = if occupied { 1.0 - p.epsilon } else { p.gamma };
                occupied = rng.gen_bool(stay);
            }
            occupancy[[site, season]] = u8::from(occupied);
            for survey in 0..surveys {
                let detected = occupied && rng.gen_bool(p.p_det);
                detections[[site, season, survey]] = u8::from(detected);
                observations.push(if detected {
                    Observation::Detected
                } else {
                    Observation::NotDetected
                });
            }
        }
        histories.push(SiteHistory::new(observations));
    }

    let data = EncounterData::new(config.layout, histories)?;
    Ok(SimulatedData { occupancy, detections, data })
}
