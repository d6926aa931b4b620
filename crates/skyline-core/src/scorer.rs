//! Scoring calculator and validation entry point.
//!
//! A [`Scorer`] is built once per scoresheet. Construction normalizes every
//! district (whitespace stripped, pallets counted) so that scoring and each
//! validation rule share the same view of the data.
//!
//! # Scoring
//!
//! For each team, every district contributes
//! `pallets of the team's colour * points per pallet`, doubled if the team's
//! colour holds the highest pallet of that district. Doubling applies to that
//! district's contribution only. A team which left its starting zone gains a
//! flat movement bonus on top.
//!
//! # Provisional Scores
//!
//! [`Scorer::calculate_scores`] never fails, even when [`Scorer::validate`]
//! would. Districts with unknown names score nothing, as do teams in a zone
//! with no colour. Arithmetic saturates rather than overflowing on absurd
//! hand-typed counts. Such scores are provisional and must not be used for
//! official results without validating first.

use std::collections::BTreeMap;

use crate::config::ScoringConfig;
use crate::error::InvalidScoresheet;
use crate::normalize::{NormalizedDistrict, NormalizedDistricts};
use crate::rules::Validator;
use crate::scoresheet::{Districts, Teams, Tla};
use crate::season::{District, ZoneColour};

/// Score of every team, keyed by TLA.
pub type Scores = BTreeMap<Tla, u32>;

/// Scores and validates a single scoresheet.
pub struct Scorer<'a> {
    teams: &'a Teams,
    districts: NormalizedDistricts,
    config: ScoringConfig,
}

impl<'a> Scorer<'a> {
    /// Create a scorer for the reference season.
    #[must_use]
    pub fn new(teams: &'a Teams, districts: &Districts) -> Self {
        Self::with_config(teams, districts, ScoringConfig::default())
    }

    /// Create a scorer with explicit scoring constants.
    #[must_use]
    pub fn with_config(teams: &'a Teams, districts: &Districts, config: ScoringConfig) -> Self {
        let districts: NormalizedDistricts = districts
            .iter()
            .map(|(name, raw)| (name.clone(), NormalizedDistrict::from_raw(raw)))
            .collect();
        tracing::debug!(
            teams = teams.len(),
            districts = districts.len(),
            "normalized scoresheet"
        );
        Self {
            teams,
            districts,
            config,
        }
    }

    /// The normalized districts this scorer works from.
    #[must_use]
    pub fn districts(&self) -> &NormalizedDistricts {
        &self.districts
    }

    /// Points scored by the given colour in a single district.
    #[must_use]
    pub fn score_district_for_colour(
        district: District,
        state: &NormalizedDistrict,
        colour: ZoneColour,
    ) -> u32 {
        let score = state
            .pallets
            .of_colour(colour)
            .saturating_mul(district.points_per_pallet());
        if state.is_highest(colour) {
            score.saturating_mul(2)
        } else {
            score
        }
    }

    /// Points scored from districts by the team in the given zone.
    #[must_use]
    pub fn district_score_for_zone(&self, zone: usize) -> u32 {
        let Some(colour) = ZoneColour::for_zone(zone) else {
            tracing::warn!(zone, "zone has no colour, scoring no district points");
            return 0;
        };

        self.districts
            .iter()
            .filter_map(|(name, state)| {
                let Some(district) = District::from_name(name) else {
                    tracing::warn!(district = %name, "unknown district scores nothing");
                    return None;
                };
                Some(Self::score_district_for_colour(district, state, colour))
            })
            .fold(0, u32::saturating_add)
    }

    /// Score every team in the roster.
    ///
    /// Returns exactly one entry per team. Always succeeds; see the module
    /// documentation on provisional scores.
    #[must_use]
    pub fn calculate_scores(&self) -> Scores {
        self.teams
            .iter()
            .map(|(tla, info)| {
                let movement = if info.left_starting_zone {
                    self.config.movement_bonus
                } else {
                    0
                };
                (
                    tla.clone(),
                    self.district_score_for_zone(info.zone).saturating_add(movement),
                )
            })
            .collect()
    }

    /// Check that the scoresheet is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns the first rule violation found, in the standard rule order.
    pub fn validate(&self) -> Result<(), InvalidScoresheet> {
        self.validate_with(&Validator::standard(&self.config))
    }

    /// Check the scoresheet against a custom set of rules.
    ///
    /// # Errors
    ///
    /// Returns the first violation reported by `validator`.
    pub fn validate_with(&self, validator: &Validator) -> Result<(), InvalidScoresheet> {
        validator.validate(&self.districts).inspect_err(|err| {
            tracing::debug!(code = %err.code, "scoresheet rejected");
        })
    }
}
