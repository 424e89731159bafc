//! Encounter-history containers for dynamic occupancy models.
//!
//! Purpose
//! -------
//! Provide small, validated containers for per-site detection histories and
//! their season/survey structure. This module centralizes input validation so
//! the forward-likelihood code can assume shape-consistent, well-formed data.
//!
//! Key behaviors
//! -------------
//! - [`Observation`] encodes a single survey outcome as a tagged enum with an
//!   explicit emission-row index, replacing the 1-indexed event-code
//!   arithmetic common in template likelihood code.
//! - [`SiteHistory`] couples an ordered observation sequence with a
//!   multiplicity (number of individuals sharing the identical history).
//! - [`EncounterData`] owns the full set of histories plus the
//!   [`SeasonLayout`] and enforces that every history spans exactly
//!   `K · J` occasions.
//!
//! Invariants & assumptions
//! ------------------------
//! - `EncounterData` is non-empty and every history length equals
//!   `layout.occasions()`.
//! - Multiplicities are ≥ 1; a multiplicity-`m` history contributes exactly
//!   `m` times the contribution of a multiplicity-1 copy.
//! - A site never detected is a valid history: it contributes through its
//!   persistence-without-detection probability and is never dropped.
//!
//! Downstream usage
//! ----------------
//! - Construct `EncounterData` at the boundary where raw detection records
//!   enter the modeling stack, or obtain one from
//!   [`simulate`](crate::occupancy::simulate).
//! - The forward pass and objective function consume these containers
//!   read-only and rely on their invariants without re-validating.
use crate::occupancy::{
    core::seasons::SeasonLayout,
    errors::{OccError, OccResult},
};

/// Outcome of one survey at one site.
///
/// The variant order fixes the emission-row index used by the forward pass:
/// `NotDetected → row 0`, `Detected → row 1`. Extending the model with a
/// false-positive code would add a third variant and emission row here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    NotDetected,
    Detected,
}

impl Observation {
    /// Emission-row index for this observation code.
    pub fn emission_row(&self) -> usize {
        match self {
            Observation::NotDetected => 0,
            Observation::Detected => 1,
        }
    }

    /// Build an observation from a 0/1 detection indicator.
    ///
    /// Any non-zero value maps to `Detected`, matching the binary encounter
    /// coding of detection matrices.
    pub fn from_indicator(value: u8) -> Self {
        if value == 0 { Observation::NotDetected } else { Observation::Detected }
    }
}

/// One site's ordered detection history across all `N` occasions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteHistory {
    /// Observed event codes, one per occasion, season-major
    /// (occasion `k · J + j` is survey `j` of season `k`).
    pub observations: Vec<Observation>,
    /// Number of individuals sharing this exact history (≥ 1).
    pub multiplicity: u32,
}

impl SiteHistory {
    /// Construct a history with multiplicity 1.
    pub fn new(observations: Vec<Observation>) -> Self {
        SiteHistory { observations, multiplicity: 1 }
    }

    /// Construct a pre-aggregated history shared by `multiplicity` individuals.
    pub fn with_multiplicity(observations: Vec<Observation>, multiplicity: u32) -> Self {
        SiteHistory { observations, multiplicity }
    }

    /// Occasion index of the first detection, if any.
    ///
    /// `None` means the site was never detected; the forward recursion treats
    /// such sites identically from occasion 1 onwards, so this is diagnostic
    /// metadata rather than an input to the likelihood.
    pub fn first_detection(&self) -> Option<usize> {
        self.observations.iter().position(|o| *o == Observation::Detected)
    }

    /// Whether the site was detected at least once.
    pub fn ever_detected(&self) -> bool {
        self.first_detection().is_some()
    }
}

/// Validated set of site histories under a common season layout.
#[derive(Debug, Clone, PartialEq)]
pub struct EncounterData {
    layout: SeasonLayout,
    sites: Vec<SiteHistory>,
}

impl EncounterData {
    /// Construct validated encounter data.
    ///
    /// Validates:
    /// - at least one site history is present,
    /// - every history has exactly `layout.occasions()` observations,
    /// - every multiplicity is ≥ 1.
    ///
    /// # Errors
    /// - [`OccError::EmptyHistorySet`] for an empty site list.
    /// - [`OccError::HistoryLengthMismatch`] with the first offending site.
    /// - [`OccError::InvalidMultiplicity`] with the first offending site.
    pub fn new(layout: SeasonLayout, sites: Vec<SiteHistory>) -> OccResult<Self> {
        if sites.is_empty() {
            return Err(OccError::EmptyHistorySet);
        }
        let expected = layout.occasions();
        for (site, history) in sites.iter().enumerate() {
            if history.observations.len() != expected {
                return Err(OccError::HistoryLengthMismatch {
                    site,
                    expected,
                    actual: history.observations.len(),
                });
            }
            if history.multiplicity == 0 {
                return Err(OccError::InvalidMultiplicity { site });
            }
        }
        Ok(EncounterData { layout, sites })
    }

    /// The season/survey layout shared by all histories.
    pub fn layout(&self) -> &SeasonLayout {
        &self.layout
    }

    /// The validated site histories.
    pub fn sites(&self) -> &[SiteHistory] {
        &self.sites
    }

    /// Number of distinct site histories.
    pub fn n_sites(&self) -> usize {
        self.sites.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_2x2() -> SeasonLayout {
        SeasonLayout::new(2, 2).expect("layout should be valid")
    }

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Emission-row mapping and indicator conversion for `Observation`.
    // - First-detection metadata on `SiteHistory`.
    // - `EncounterData::new` validation (empty set, length mismatch,
    //   zero multiplicity, happy path).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // The tagged enum must map onto emission rows without index arithmetic.
    //
    // Expect
    // ------
    // - `NotDetected → 0`, `Detected → 1`, and indicator round-trips.
    fn observation_rows_and_indicators() {
        assert_eq!(Observation::NotDetected.emission_row(), 0);
        assert_eq!(Observation::Detected.emission_row(), 1);
        assert_eq!(Observation::from_indicator(0), Observation::NotDetected);
        assert_eq!(Observation::from_indicator(1), Observation::Detected);
    }

    #[test]
    // Purpose
    // -------
    // `first_detection` distinguishes never-detected sites from the rest.
    //
    // Given
    // -----
    // - An all-zero history and a history with a detection at occasion 2.
    //
    // Expect
    // ------
    // - `None` for the former, `Some(2)` for the latter.
    fn first_detection_metadata() {
        let never = SiteHistory::new(vec![Observation::NotDetected; 4]);
        assert_eq!(never.first_detection(), None);
        assert!(!never.ever_detected());

        let detected = SiteHistory::new(vec![
            Observation::NotDetected,
            Observation::NotDetected,
            Observation::Detected,
            Observation::NotDetected,
        ]);
        assert_eq!(detected.first_detection(), Some(2));
        assert!(detected.ever_detected());
    }

    #[test]
    // Purpose
    // -------
    // Construction succeeds for shape-consistent histories.
    fn encounter_data_happy_path() {
        let sites = vec![
            SiteHistory::new(vec![Observation::NotDetected; 4]),
            SiteHistory::with_multiplicity(vec![Observation::Detected; 4], 3),
        ];
        let data = EncounterData::new(layout_2x2(), sites).expect("construction should succeed");
        assert_eq!(data.n_sites(), 2);
        assert_eq!(data.layout().occasions(), 4);
    }

    #[test]
    // Purpose
    // -------
    // Shape violations are rejected at setup, before any likelihood work.
    //
    // Expect
    // ------
    // - Empty set → `EmptyHistorySet`.
    // - Wrong length → `HistoryLengthMismatch` naming the site.
    // - Zero multiplicity → `InvalidMultiplicity` naming the site.
    fn encounter_data_rejects_malformed_input() {
        assert_eq!(EncounterData::new(layout_2x2(), vec![]), Err(OccError::EmptyHistorySet));

        let short = vec![
            SiteHistory::new(vec![Observation::NotDetected; 4]),
            SiteHistory::new(vec![Observation::NotDetected; 3]),
        ];
        assert_eq!(
            EncounterData::new(layout_2x2(), short),
            Err(OccError::HistoryLengthMismatch { site: 1, expected: 4, actual: 3 })
        );

        let zero_mult = vec![SiteHistory::with_multiplicity(vec![Observation::Detected; 4], 0)];
        assert_eq!(
            EncounterData::new(layout_2x2(), zero_mult),
            Err(OccError::InvalidMultiplicity { site: 0 })
        );
    }
}
