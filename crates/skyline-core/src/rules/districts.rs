//! District set rule.

use crate::error::ErrorCode;
use crate::normalize::NormalizedDistricts;
use crate::season::District;
use crate::text::{join_and, quoted};

use super::Rule;

/// The scoresheet names exactly the season's districts.
///
/// Missing districts are listed by name in season order; unknown extras are
/// quoted since they may contain arbitrary text.
pub struct DistrictSet;

impl Rule for DistrictSet {
    fn code(&self) -> ErrorCode {
        ErrorCode::InvalidDistricts
    }

    fn find_violation(&self, districts: &NormalizedDistricts) -> Option<String> {
        let missing: Vec<&str> = District::all()
            .iter()
            .map(|d| d.name())
            .filter(|name| !districts.contains_key(*name))
            .collect();
        let extra: Vec<String> = districts
            .keys()
            .filter(|name| District::from_name(name).is_none())
            .map(|name| quoted(name))
            .collect();

        if missing.is_empty() && extra.is_empty() {
            return None;
        }

        let mut detail = String::from("Wrong districts specified.");
        if !missing.is_empty() {
            detail.push_str(&format!(" Missing: {}.", join_and(&missing)));
        }
        if !extra.is_empty() {
            detail.push_str(&format!(" Extra: {}.", join_and(&extra)));
        }
        Some(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::NormalizedDistrict;

    fn full_set() -> NormalizedDistricts {
        District::all()
            .iter()
            .map(|d| (d.name().to_string(), NormalizedDistrict::default()))
            .collect()
    }

    #[test]
    fn accepts_exact_set() {
        assert_eq!(DistrictSet.find_violation(&full_set()), None);
    }

    #[test]
    fn names_missing_districts() {
        let mut districts = full_set();
        districts.remove("outer_sw");
        districts.remove("central");
        assert_eq!(
            DistrictSet.find_violation(&districts).unwrap(),
            "Wrong districts specified. Missing: outer_sw and central."
        );
    }

    #[test]
    fn quotes_extra_districts() {
        let mut districts = full_set();
        districts.insert("bees".to_string(), NormalizedDistrict::default());
        assert_eq!(
            DistrictSet.find_violation(&districts).unwrap(),
            "Wrong districts specified. Extra: 'bees'."
        );
    }

    #[test]
    fn reports_missing_and_extra_together() {
        let mut districts = full_set();
        districts.remove("inner_ne");
        districts.insert("Inner_NE".to_string(), NormalizedDistrict::default());
        let message = DistrictSet.find_violation(&districts).unwrap();
        assert!(message.contains("Missing: inner_ne."), "{message}");
        assert!(message.contains("Extra: 'Inner_NE'."), "{message}");
    }
}
