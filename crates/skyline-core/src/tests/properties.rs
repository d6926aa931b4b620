//! Property tests over generated scoresheets.

use proptest::prelude::*;

use crate::error::ErrorCode;
use crate::scorer::Scorer;
use crate::scoresheet::{Districts, Pallets, RawDistrict, TeamData, Teams, Tla};
use crate::season::{District, ZoneColour};

use super::helpers::{empty_districts, shuffled, two_teams};

fn colour_symbol() -> impl Strategy<Value = &'static str> {
    prop::sample::select(ZoneColour::all().iter().map(|c| c.symbol()).collect::<Vec<_>>())
}

/// Districts filled with up to four valid pallets each, no "highest" entries.
fn arb_districts() -> impl Strategy<Value = Districts> {
    prop::collection::vec(prop::collection::vec(colour_symbol(), 0..4), District::COUNT).prop_map(
        |per_district| {
            District::all()
                .iter()
                .zip(per_district)
                .map(|(d, symbols)| (d.name().to_string(), RawDistrict::from_text("", symbols.concat())))
                .collect()
        },
    )
}

/// A roster of one to four teams in distinct zones.
fn arb_teams() -> impl Strategy<Value = Teams> {
    (1..=ZoneColour::COUNT, prop::collection::vec(any::<bool>(), ZoneColour::COUNT)).prop_map(
        |(count, moved)| {
            (0..count)
                .map(|zone| {
                    let data = TeamData {
                        zone,
                        present: true,
                        left_starting_zone: moved[zone],
                    };
                    (Tla::new(format!("T{zone:02}")), data)
                })
                .collect()
        },
    )
}

/// Insert whitespace between and around every character.
fn spaced(text: &str) -> String {
    let mut out = String::from("  ");
    for c in text.chars() {
        out.push(c);
        out.push_str(" \t");
    }
    out
}

proptest! {
    #[test]
    fn scores_cover_exactly_the_roster(teams in arb_teams(), districts in arb_districts()) {
        let scores = Scorer::new(&teams, &districts).calculate_scores();
        prop_assert!(scores.keys().eq(teams.keys()));
    }

    #[test]
    fn whitespace_and_order_do_not_change_scores(
        teams in arb_teams(),
        districts in arb_districts(),
        seed in any::<u64>()
    ) {
        let messy: Districts = districts
            .iter()
            .map(|(name, raw)| {
                let Pallets::Text(text) = &raw.pallets else {
                    unreachable!("generated districts are text");
                };
                (name.clone(), RawDistrict::from_text(" ", spaced(&shuffled(text, seed))))
            })
            .collect();
        prop_assert_eq!(
            Scorer::new(&teams, &districts).calculate_scores(),
            Scorer::new(&teams, &messy).calculate_scores()
        );
    }

    #[test]
    fn movement_bonus_is_independent_of_pallets(districts in arb_districts()) {
        let mut teams = two_teams();
        let still = Scorer::new(&teams, &districts).calculate_scores();
        teams.get_mut(&Tla::new("GGG")).unwrap().left_starting_zone = true;
        let moved = Scorer::new(&teams, &districts).calculate_scores();
        prop_assert_eq!(moved[&Tla::new("GGG")], still[&Tla::new("GGG")] + 1);
        prop_assert_eq!(moved[&Tla::new("OOO")], still[&Tla::new("OOO")]);
    }

    #[test]
    fn quota_is_summed_across_districts(per_district in 1u32..=6, spread in 2usize..=District::COUNT) {
        let mut districts = empty_districts();
        for d in &District::all()[..spread] {
            districts.insert(
                d.name().to_string(),
                RawDistrict::from_counts("", [("Y", per_district)]),
            );
        }
        #[allow(clippy::cast_possible_truncation)]
        let total = per_district * spread as u32;
        let teams = two_teams();
        let result = Scorer::new(&teams, &districts).validate();
        if total > 6 {
            prop_assert_eq!(result.unwrap_err().code, ErrorCode::TooManyPallets);
        } else {
            prop_assert!(result.is_ok());
        }
    }
}
