//! Rules about the "highest" pallet of each district.

use crate::error::ErrorCode;
use crate::normalize::NormalizedDistricts;
use crate::season::{District, ZoneColour};
use crate::text::{join_and, quoted};

use super::{colour_choices, Rule};

/// Every non-empty "highest" entry is exactly one zone colour.
pub struct HighestIsColour;

impl Rule for HighestIsColour {
    fn code(&self) -> ErrorCode {
        ErrorCode::InvalidHighestPallet
    }

    fn find_violation(&self, districts: &NormalizedDistricts) -> Option<String> {
        let bad: Vec<String> = districts
            .iter()
            .filter_map(|(name, district)| {
                let highest = district.highest.as_deref()?;
                ZoneColour::from_symbol(highest)
                    .is_none()
                    .then(|| format!("{name}: {}", quoted(highest)))
            })
            .collect();

        if bad.is_empty() {
            return None;
        }
        Some(format!(
            "Invalid pallets specified as the highest in some districts -- \
             must be a single pallet from {}.\n{}",
            colour_choices(),
            bad.join("\n"),
        ))
    }
}

/// A district's "highest" colour has at least one pallet there.
pub struct HighestIsPresent;

impl Rule for HighestIsPresent {
    fn code(&self) -> ErrorCode {
        ErrorCode::ImpossibleHighestPallet
    }

    fn find_violation(&self, districts: &NormalizedDistricts) -> Option<String> {
        let bad: Vec<String> = districts
            .iter()
            .filter_map(|(name, district)| {
                let highest = district.highest.as_deref()?;
                if district.pallets.get(highest) > 0 {
                    return None;
                }
                Some(if district.pallets.is_empty() {
                    format!(
                        "District {name} has no pallets so {} cannot be the highest.",
                        quoted(highest),
                    )
                } else {
                    format!(
                        "District {name} has only {} so {} cannot be the highest.",
                        join_and(district.pallets.symbols()),
                        quoted(highest),
                    )
                })
            })
            .collect();

        if bad.is_empty() {
            return None;
        }
        Some(format!(
            "Impossible pallets specified as the highest in some districts -- \
             must be a pallet which is present in the district.\n{}",
            bad.join("\n"),
        ))
    }
}

/// A lone pallet in a district without a high-rise is on the floor, so it has
/// nothing to be highest over.
///
/// Which districts lack a high-rise is a season assumption made in
/// [`District::features`]: only the inner districts. An arena layout with
/// different high-rises only needs that table changed.
pub struct HighestNotOnFloor;

impl Rule for HighestNotOnFloor {
    fn code(&self) -> ErrorCode {
        ErrorCode::ImpossibleHighestSinglePallet
    }

    fn find_violation(&self, districts: &NormalizedDistricts) -> Option<String> {
        let bad: Vec<String> = District::all()
            .iter()
            .filter(|d| !d.has_high_rise())
            .filter_map(|d| {
                let district = districts.get(d.name())?;
                let highest = district.highest.as_deref()?;
                (district.pallets.total() == 1)
                    .then(|| format!("{}: {}", d.name(), quoted(highest)))
            })
            .collect();

        if bad.is_empty() {
            return None;
        }
        Some(format!(
            "Districts without a high-rise and only a single pallet cannot have \
             a \"highest\" pallet since pallets on the floor cannot count as the \
             highest.\n{}",
            bad.join("\n"),
        ))
    }
}
