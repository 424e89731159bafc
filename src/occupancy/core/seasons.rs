//! Season/survey layout for dynamic occupancy designs.
//!
//! A study runs `K` primary occasions (seasons) of `J` secondary occasions
//! (surveys) each, for `N = K · J` total occasions per site. Occupancy is
//! assumed static within a season; colonization and extinction act only
//! between consecutive seasons. [`SeasonLayout`] captures this partition and
//! classifies each of the `N − 1` transition slots as within-season
//! (identity dynamics) or between-season (colonization/extinction dynamics).
use crate::occupancy::errors::{OccError, OccResult};

/// Partition of survey occasions into seasons.
///
/// Invariants (enforced at construction):
/// - `seasons ≥ 1` and `surveys ≥ 1`, so `occasions() ≥ 1`.
///
/// Derived structure:
/// - `occasions() = seasons · surveys`.
/// - Transition slot `t` (between occasions `t` and `t + 1`,
///   `t = 0 .. occasions() − 2`) crosses a season boundary iff
///   `(t + 1) % surveys == 0`.
/// - There are `seasons · (surveys − 1)` within-season slots and
///   `seasons − 1` between-season slots; the two always sum to
///   `occasions() − 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonLayout {
    seasons: usize,
    surveys: usize,
}

impl SeasonLayout {
    /// Construct a validated layout of `seasons` primary occasions with
    /// `surveys` secondary occasions each.
    ///
    /// # Errors
    /// - [`OccError::ZeroSeasons`] if `seasons == 0`.
    /// - [`OccError::ZeroSurveys`] if `surveys == 0`.
    pub fn new(seasons: usize, surveys: usize) -> OccResult<Self> {
        if seasons == 0 {
            return Err(OccError::ZeroSeasons);
        }
        if surveys == 0 {
            return Err(OccError::ZeroSurveys);
        }
        Ok(SeasonLayout { seasons, surveys })
    }

    /// Number of primary occasions (seasons), `K`.
    pub fn seasons(&self) -> usize {
        self.seasons
    }

    /// Number of secondary occasions (surveys) per season, `J`.
    pub fn surveys(&self) -> usize {
        self.surveys
    }

    /// Total number of occasions per site, `N = K · J`.
    pub fn occasions(&self) -> usize {
        self.seasons * self.surveys
    }

    /// Season index (0-based) of occasion `occasion`.
    ///
    /// Callers must ensure `occasion < occasions()`.
    pub fn season_of(&self, occasion: usize) -> usize {
        occasion / self.surveys
    }

    /// Whether transition slot `slot` crosses a season boundary.
    ///
    /// Slot `slot` sits between occasions `slot` and `slot + 1`; it crosses a
    /// boundary exactly when occasion `slot` is the last survey of its season.
    /// Callers must ensure `slot < occasions() − 1`.
    pub fn between_seasons(&self, slot: usize) -> bool {
        (slot + 1) % self.surveys == 0
    }

    /// Number of within-season transition slots, `K · (J − 1)`.
    pub fn within_season_slots(&self) -> usize {
        self.seasons * (self.surveys - 1)
    }

    /// Number of between-season transition slots, `K − 1`.
    pub fn between_season_slots(&self) -> usize {
        self.seasons - 1
    }
}
