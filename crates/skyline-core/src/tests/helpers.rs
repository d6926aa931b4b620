//! Test helpers for building scoresheets.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::{ErrorCode, InvalidScoresheet};
use crate::scorer::{Scorer, Scores};
use crate::scoresheet::{Districts, RawDistrict, TeamData, Teams, Tla};
use crate::season::District;

/// Two present teams, GGG in zone 0 and OOO in zone 1, neither having moved.
pub fn two_teams() -> Teams {
    let mut teams = Teams::new();
    teams.insert(Tla::new("GGG"), TeamData::in_zone(0));
    teams.insert(Tla::new("OOO"), TeamData::in_zone(1));
    teams
}

/// Every district of the season, all empty.
pub fn empty_districts() -> Districts {
    District::all()
        .iter()
        .map(|d| (d.name().to_string(), RawDistrict::default()))
        .collect()
}

/// Set a district's entry from free text.
pub fn set_district(districts: &mut Districts, name: &str, highest: &str, pallets: &str) {
    districts.insert(name.to_string(), RawDistrict::from_text(highest, pallets));
}

/// Build expected scores from TLA and score pairs.
pub fn scores(entries: &[(&str, u32)]) -> Scores {
    entries
        .iter()
        .map(|(tla, score)| (Tla::new(*tla), *score))
        .collect()
}

/// Validate then score, panicking if the scoresheet is invalid.
pub fn assert_scores(teams: &Teams, districts: &Districts, expected: &[(&str, u32)]) {
    let scorer = Scorer::new(teams, districts);
    if let Err(err) = scorer.validate() {
        panic!("expected a valid scoresheet, got {err}");
    }
    assert_eq!(scorer.calculate_scores(), scores(expected), "Wrong scores");
}

/// Validate, expecting failure with the given code. Returns the failure.
pub fn assert_invalid(teams: &Teams, districts: &Districts, code: ErrorCode) -> InvalidScoresheet {
    let err = Scorer::new(teams, districts)
        .validate()
        .expect_err("expected an invalid scoresheet");
    assert_eq!(err.code, code, "Wrong error code, message was: {}", err.message);
    err
}

/// Shuffle the characters of a string with a seeded RNG.
pub fn shuffled(text: &str, seed: u64) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut chars: Vec<char> = text.chars().collect();
    chars.shuffle(&mut rng);
    chars.into_iter().collect()
}
