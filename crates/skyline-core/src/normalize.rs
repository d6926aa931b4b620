//! Normalization of referee-entered district data.
//!
//! Scoresheets are typed in by hand, so pallet and "highest" entries may carry
//! stray whitespace anywhere. This module strips it and counts pallets once,
//! when a [`Scorer`](crate::Scorer) is built, so every rule and the scoring
//! pass see the same cleaned view.

use std::collections::BTreeMap;

use crate::scoresheet::{Pallets, RawDistrict};
use crate::season::ZoneColour;

/// Multiset of pallet symbols.
///
/// Symbols are kept as strings so that invalid entries survive normalization
/// and can be reported. Zero counts are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PalletCounts(BTreeMap<String, u32>);

impl PalletCounts {
    /// Count the pallets of a raw entry.
    #[must_use]
    pub fn from_pallets(pallets: &Pallets) -> Self {
        let mut counts = Self::default();
        match pallets {
            Pallets::Text(text) => {
                for symbol in text.chars().filter(|c| !c.is_whitespace()) {
                    counts.add(symbol.to_string(), 1);
                }
            }
            Pallets::Counts(map) => {
                for (symbol, &count) in map {
                    counts.add(strip_whitespace(symbol), count);
                }
            }
        }
        counts
    }

    // Counts saturate so absurd entries still trip the quota rule.
    fn add(&mut self, symbol: String, count: u32) {
        if count > 0 {
            let entry = self.0.entry(symbol).or_insert(0);
            *entry = entry.saturating_add(count);
        }
    }

    /// Number of pallets with the given symbol.
    #[must_use]
    pub fn get(&self, symbol: &str) -> u32 {
        self.0.get(symbol).copied().unwrap_or(0)
    }

    /// Number of pallets of the given colour.
    #[must_use]
    pub fn of_colour(&self, colour: ZoneColour) -> u32 {
        self.get(colour.symbol())
    }

    /// Total number of pallets, saturating at `u32::MAX`.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.values().fold(0, |acc, &count| acc.saturating_add(count))
    }

    /// Whether no pallets are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Symbols present, in sorted order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Symbol and count pairs, in sorted symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(symbol, &count)| (symbol.as_str(), count))
    }

    /// Add every pallet of `other` into `self`.
    pub fn merge(&mut self, other: &Self) {
        for (symbol, count) in other.iter() {
            self.add(symbol.to_string(), count);
        }
    }
}

/// Normalized districts keyed by their scoresheet name.
pub type NormalizedDistricts = BTreeMap<String, NormalizedDistrict>;

/// A district after whitespace stripping and pallet counting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedDistrict {
    /// Symbol named as highest, if any.
    pub highest: Option<String>,
    /// Counted pallets.
    pub pallets: PalletCounts,
}

impl NormalizedDistrict {
    /// Normalize a raw district entry.
    #[must_use]
    pub fn from_raw(raw: &RawDistrict) -> Self {
        let highest = strip_whitespace(&raw.highest);
        Self {
            highest: (!highest.is_empty()).then_some(highest),
            pallets: PalletCounts::from_pallets(&raw.pallets),
        }
    }

    /// Whether the highest pallet belongs to the given colour.
    #[must_use]
    pub fn is_highest(&self, colour: ZoneColour) -> bool {
        self.highest.as_deref() == Some(colour.symbol())
    }
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
