//! Fixed game elements of the reference season.
//!
//! The districts, their point values and the zone colours are known at build
//! time and do not depend on how many teams play in a match.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Maximum number of pallets of any one colour across the whole arena.
pub const PALLETS_PER_COLOUR: u32 = 6;

/// Points awarded to a team whose robot left its starting zone.
pub const MOVEMENT_BONUS: u32 = 1;

// =============================================================================
// Zone Colours
// =============================================================================

/// Colour of a starting zone, and of the pallets belonging to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ZoneColour {
    /// Zone 0
    Green = 0,
    /// Zone 1
    Orange = 1,
    /// Zone 2
    Purple = 2,
    /// Zone 3
    Yellow = 3,
}

impl ZoneColour {
    /// Total number of zone colours.
    pub const COUNT: usize = 4;

    /// Get all colours in zone order.
    #[must_use]
    pub const fn all() -> &'static [ZoneColour] {
        &[
            ZoneColour::Green,
            ZoneColour::Orange,
            ZoneColour::Purple,
            ZoneColour::Yellow,
        ]
    }

    /// Colour of the given zone, if the arena has that many zones.
    #[must_use]
    pub fn for_zone(zone: usize) -> Option<Self> {
        Self::all().get(zone).copied()
    }

    /// The single-letter symbol used for this colour on a scoresheet.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            ZoneColour::Green => "G",
            ZoneColour::Orange => "O",
            ZoneColour::Purple => "P",
            ZoneColour::Yellow => "Y",
        }
    }

    /// Parse a scoresheet symbol. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.symbol() == symbol)
    }
}

// =============================================================================
// Districts
// =============================================================================

bitflags! {
    /// Structural features of a district.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DistrictFeatures: u8 {
        /// The district has a high-rise a single pallet can be placed on.
        const HIGH_RISE = 0b0000_0001;
    }
}

/// A named scoring region of the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum District {
    /// North-west outer district
    OuterNw,
    /// North-east outer district
    OuterNe,
    /// South-east outer district
    OuterSe,
    /// South-west outer district
    OuterSw,
    /// North-west inner district
    InnerNw,
    /// North-east inner district
    InnerNe,
    /// South-east inner district
    InnerSe,
    /// South-west inner district
    InnerSw,
    /// The central district
    Central,
}

impl District {
    /// Total number of districts.
    pub const COUNT: usize = 9;

    /// Get all districts in scoresheet order.
    #[must_use]
    pub const fn all() -> &'static [District] {
        &[
            District::OuterNw,
            District::OuterNe,
            District::OuterSe,
            District::OuterSw,
            District::InnerNw,
            District::InnerNe,
            District::InnerSe,
            District::InnerSw,
            District::Central,
        ]
    }

    /// Name of the district as it appears in a scoresheet.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            District::OuterNw => "outer_nw",
            District::OuterNe => "outer_ne",
            District::OuterSe => "outer_se",
            District::OuterSw => "outer_sw",
            District::InnerNw => "inner_nw",
            District::InnerNe => "inner_ne",
            District::InnerSe => "inner_se",
            District::InnerSw => "inner_sw",
            District::Central => "central",
        }
    }

    /// Look up a district by its scoresheet name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|d| d.name() == name)
    }

    /// Points scored for each pallet in this district.
    #[must_use]
    pub const fn points_per_pallet(self) -> u32 {
        match self {
            District::OuterNw | District::OuterNe | District::OuterSe | District::OuterSw => 1,
            District::InnerNw | District::InnerNe | District::InnerSe | District::InnerSw => 2,
            District::Central => 3,
        }
    }

    /// Structural features of this district.
    ///
    /// Assumed layout: the outer districts and `central` carry a high-rise,
    /// the inner districts are floor only.
    #[must_use]
    pub const fn features(self) -> DistrictFeatures {
        match self {
            District::InnerNw | District::InnerNe | District::InnerSe | District::InnerSw => {
                DistrictFeatures::empty()
            }
            District::OuterNw
            | District::OuterNe
            | District::OuterSe
            | District::OuterSw
            | District::Central => DistrictFeatures::HIGH_RISE,
        }
    }

    /// Whether a lone pallet in this district can sit above the floor.
    #[must_use]
    pub const fn has_high_rise(self) -> bool {
        self.features().contains(DistrictFeatures::HIGH_RISE)
    }
}
