//! # Skyline Core
//!
//! Scoring and scoresheet validation for a single season of the Skyline arena.
//!
//! Given the team roster of a match and the pallet state of each district as
//! recorded by a referee, this crate computes every team's score and decides
//! whether the recorded scoresheet is internally consistent.
//!
//! ## Architecture
//!
//! - **Season**: the fixed districts, zone colours and constants of the game
//! - **Scoresheet**: typed records for the roster and raw district state
//! - **Scorer**: normalizes a scoresheet once, then scores and validates it
//! - **Rules**: the ordered, first-failure-wins validation pipeline
//!
//! Scoring never fails, even on a scoresheet that would not validate. This
//! allows provisional scores to be shown while a sheet is still being
//! corrected. Official results must always validate first.
//!
//! ## Usage
//!
//! ```
//! use std::collections::BTreeMap;
//! use skyline_core::{District, Districts, RawDistrict, Scorer, TeamData, Tla};
//!
//! let mut teams = BTreeMap::new();
//! teams.insert(Tla::new("GGG"), TeamData::in_zone(0));
//! teams.insert(Tla::new("OOO"), TeamData::in_zone(1));
//!
//! let mut districts: Districts = District::all()
//!     .iter()
//!     .map(|d| (d.name().to_string(), RawDistrict::default()))
//!     .collect();
//! districts.insert("outer_nw".to_string(), RawDistrict::from_text("G", "GGO"));
//!
//! let scorer = Scorer::new(&teams, &districts);
//! scorer.validate()?;
//!
//! let scores = scorer.calculate_scores();
//! assert_eq!(scores[&Tla::new("GGG")], 4);
//! assert_eq!(scores[&Tla::new("OOO")], 1);
//! # Ok::<(), skyline_core::InvalidScoresheet>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod normalize;
pub mod rules;
pub mod scorer;
pub mod scoresheet;
pub mod season;
pub mod text;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use config::ScoringConfig;
pub use error::{ErrorCode, InvalidScoresheet};
pub use normalize::{NormalizedDistrict, NormalizedDistricts, PalletCounts};
pub use rules::{Rule, Validator};
pub use scorer::{Scorer, Scores};
pub use scoresheet::{Districts, MatchScoresheet, Pallets, RawDistrict, TeamData, Teams, Tla};
pub use season::{District, DistrictFeatures, ZoneColour, MOVEMENT_BONUS, PALLETS_PER_COLOUR};
