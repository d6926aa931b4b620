//! Scoring configuration.

use serde::{Deserialize, Serialize};

use crate::season::{MOVEMENT_BONUS, PALLETS_PER_COLOUR};

/// Tunable constants used by scoring and validation.
///
/// Defaults to the reference season. Missing fields in a serialized config
/// fall back to the same defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Maximum pallets of each colour summed across all districts.
    pub pallets_per_colour: u32,
    /// Flat bonus for a team that left its starting zone.
    pub movement_bonus: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            pallets_per_colour: PALLETS_PER_COLOUR,
            movement_bonus: MOVEMENT_BONUS,
        }
    }
}
