//! Rules about the pallets placed in districts.

use crate::error::ErrorCode;
use crate::normalize::{NormalizedDistricts, PalletCounts};
use crate::season::ZoneColour;
use crate::text::{join_and, quoted};

use super::{colour_choices, Rule};

/// Every pallet is one of the zone colours.
pub struct PalletsAreColours;

impl Rule for PalletsAreColours {
    fn code(&self) -> ErrorCode {
        ErrorCode::InvalidPallets
    }

    fn find_violation(&self, districts: &NormalizedDistricts) -> Option<String> {
        let bad: Vec<String> = districts
            .iter()
            .filter_map(|(name, district)| {
                let invalid: Vec<String> = district
                    .pallets
                    .symbols()
                    .filter(|symbol| ZoneColour::from_symbol(symbol).is_none())
                    .map(quoted)
                    .collect();
                (!invalid.is_empty()).then(|| format!("{name}: {}", join_and(&invalid)))
            })
            .collect();

        if bad.is_empty() {
            return None;
        }
        Some(format!(
            "Invalid pallets specified in some districts -- must be from {}.\n{}",
            colour_choices(),
            bad.join("\n"),
        ))
    }
}

/// No colour has more pallets across the whole arena than exist.
///
/// The limit applies to each colour summed over all districts, not to any one
/// district.
pub struct PalletQuota {
    limit: u32,
}

impl PalletQuota {
    /// Allow at most `limit` pallets of each colour.
    #[must_use]
    pub fn new(limit: u32) -> Self {
        Self { limit }
    }
}

impl Rule for PalletQuota {
    fn code(&self) -> ErrorCode {
        ErrorCode::TooManyPallets
    }

    fn find_violation(&self, districts: &NormalizedDistricts) -> Option<String> {
        let mut totals = PalletCounts::default();
        for district in districts.values() {
            totals.merge(&district.pallets);
        }

        let over: Vec<String> = totals
            .iter()
            .filter(|&(_, count)| count > self.limit)
            .map(|(symbol, _)| quoted(symbol))
            .collect();

        if over.is_empty() {
            return None;
        }
        let summary: Vec<String> = totals
            .iter()
            .map(|(symbol, count)| format!("{}: {count}", quoted(symbol)))
            .collect();
        Some(format!(
            "Too many {} pallets specified, must be no more than {} of each type.\n\
             Totals: {}",
            join_and(&over),
            self.limit,
            summary.join(", "),
        ))
    }
}
