//! Typed records for a match scoresheet as supplied by the caller.
//!
//! These mirror the stored score file: a roster of teams keyed by TLA and the
//! raw, referee-entered state of every district. Nothing here is validated;
//! see [`Scorer::validate`](crate::Scorer::validate).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Three letter acronym identifying a team.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tla(String);

impl Tla {
    /// Create a TLA from any string-like value.
    pub fn new(tla: impl Into<String>) -> Self {
        Self(tla.into())
    }

    /// The TLA as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-team scoring record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamData {
    /// Starting zone index, which also picks the team's pallet colour.
    pub zone: usize,
    /// Whether the team was present. Not used for scoring.
    #[serde(default)]
    pub present: bool,
    /// Whether the robot left its starting zone.
    #[serde(default)]
    pub left_starting_zone: bool,
}

impl TeamData {
    /// A present team in the given zone which has not moved.
    #[must_use]
    pub fn in_zone(zone: usize) -> Self {
        Self {
            zone,
            present: true,
            left_starting_zone: false,
        }
    }
}

/// The pallets recorded in a district.
///
/// Referees enter either free text, where every non-whitespace character is one
/// pallet, or a structured counter of symbol to count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Pallets {
    /// One pallet per non-whitespace character, e.g. `"GGO"`.
    Text(String),
    /// Pallet counts keyed by symbol, e.g. `{"G": 2, "O": 1}`.
    Counts(BTreeMap<String, u32>),
}

impl Default for Pallets {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// A district exactly as entered on the scoresheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDistrict {
    /// Symbol of the colour owning the topmost pallet, or empty.
    #[serde(default)]
    pub highest: String,
    /// Pallets placed in the district.
    #[serde(default)]
    pub pallets: Pallets,
}

impl RawDistrict {
    /// District entered as free text.
    pub fn from_text(highest: impl Into<String>, pallets: impl Into<String>) -> Self {
        Self {
            highest: highest.into(),
            pallets: Pallets::Text(pallets.into()),
        }
    }

    /// District entered as a structured counter.
    pub fn from_counts<'a>(
        highest: impl Into<String>,
        counts: impl IntoIterator<Item = (&'a str, u32)>,
    ) -> Self {
        Self {
            highest: highest.into(),
            pallets: Pallets::Counts(
                counts
                    .into_iter()
                    .map(|(symbol, count)| (symbol.to_string(), count))
                    .collect(),
            ),
        }
    }
}

/// Team roster keyed by TLA.
pub type Teams = BTreeMap<Tla, TeamData>;

/// Raw district state keyed by district name.
///
/// Keyed by string rather than [`District`](crate::District) so that unknown
/// or missing names can be reported by validation.
pub type Districts = BTreeMap<String, RawDistrict>;

/// Zone data the arena records outside of any team's zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherZone {
    /// State of every district.
    #[serde(default)]
    pub districts: Districts,
}

/// Per-zone arena state of a match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaZones {
    /// The shared area of the arena, which holds the districts.
    #[serde(default)]
    pub other: OtherZone,
}

/// A stored match score file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScoresheet {
    /// Arena the match was played in.
    pub arena_id: String,
    /// Match number within the competition.
    pub match_number: u32,
    /// Roster of the match.
    pub teams: Teams,
    /// District state.
    #[serde(default)]
    pub arena_zones: ArenaZones,
}

impl MatchScoresheet {
    /// The district state of this match.
    #[must_use]
    pub fn districts(&self) -> &Districts {
        &self.arena_zones.other.districts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pallets_accept_text_and_counts() {
        let text: RawDistrict = serde_json::from_str(r#"{"highest": "G", "pallets": "GGO"}"#).unwrap();
        assert_eq!(text, RawDistrict::from_text("G", "GGO"));

        let counts: RawDistrict =
            serde_json::from_str(r#"{"highest": "", "pallets": {"G": 2, "O": 1}}"#).unwrap();
        assert_eq!(counts, RawDistrict::from_counts("", [("G", 2), ("O", 1)]));
    }

    #[test]
    fn team_flags_default_to_false() {
        let team: TeamData = serde_json::from_str(r#"{"zone": 2}"#).unwrap();
        assert_eq!(team.zone, 2);
        assert!(!team.present);
        assert!(!team.left_starting_zone);
    }

    #[test]
    fn match_scoresheet_reads_nested_districts() {
        let json = r#"{
            "arena_id": "main",
            "match_number": 3,
            "teams": {"ABC": {"zone": 0, "present": true, "left_starting_zone": true}},
            "arena_zones": {"other": {"districts": {"central": {"highest": "", "pallets": "G"}}}}
        }"#;
        let sheet: MatchScoresheet = serde_json::from_str(json).unwrap();
        assert_eq!(sheet.match_number, 3);
        assert!(sheet.teams[&Tla::new("ABC")].left_starting_zone);
        assert_eq!(sheet.districts()["central"], RawDistrict::from_text("", "G"));
    }
}
