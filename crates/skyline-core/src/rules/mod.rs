//! Scoresheet validation rules.
//!
//! Validation is an ordered pipeline of independent [`Rule`]s. Each rule looks
//! at the normalized districts and either passes or describes every violation
//! it found. The [`Validator`] runs rules in order and stops at the first one
//! which fails, so a scoresheet is reported one problem at a time.
//!
//! # Ordering
//!
//! Later rules assume earlier ones passed. For example the pallet quota is only
//! meaningful once every pallet is known to be a real colour, and the
//! single-pallet rule looks up districts by name, which is only safe once the
//! district set is known to be complete. The standard order is:
//!
//! 1. [`DistrictSet`]: `invalid_districts`
//! 2. [`HighestIsColour`]: `invalid_highest_pallet`
//! 3. [`PalletsAreColours`]: `invalid_pallets`
//! 4. [`HighestIsPresent`]: `impossible_highest_pallet`
//! 5. [`HighestNotOnFloor`]: `impossible_highest_single_pallet`
//! 6. [`PalletQuota`]: `too_many_pallets`

mod districts;
mod highest;
mod pallets;

pub use districts::DistrictSet;
pub use highest::{HighestIsColour, HighestIsPresent, HighestNotOnFloor};
pub use pallets::{PalletQuota, PalletsAreColours};

use crate::config::ScoringConfig;
use crate::error::{ErrorCode, InvalidScoresheet};
use crate::normalize::NormalizedDistricts;
use crate::season::ZoneColour;
use crate::text::{join_or, quoted};

/// A single consistency check over a scoresheet's districts.
///
/// # Example
///
/// ```
/// use skyline_core::rules::Rule;
/// use skyline_core::{ErrorCode, NormalizedDistricts};
///
/// struct NeverEmpty;
///
/// impl Rule for NeverEmpty {
///     fn code(&self) -> ErrorCode {
///         ErrorCode::InvalidDistricts
///     }
///
///     fn find_violation(&self, districts: &NormalizedDistricts) -> Option<String> {
///         districts.is_empty().then(|| "No districts specified.".to_string())
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// The code reported when this rule fails.
    fn code(&self) -> ErrorCode;

    /// Returns a message describing every violation, or `None` if the
    /// districts satisfy this rule.
    fn find_violation(&self, districts: &NormalizedDistricts) -> Option<String>;
}

/// Ordered, first-failure-wins collection of rules.
pub struct Validator {
    rules: Vec<Box<dyn Rule>>,
}

impl Validator {
    /// A validator with no rules, which accepts everything.
    #[must_use]
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The season's rules in their required order.
    #[must_use]
    pub fn standard(config: &ScoringConfig) -> Self {
        Self::empty()
            .with_rule(DistrictSet)
            .with_rule(HighestIsColour)
            .with_rule(PalletsAreColours)
            .with_rule(HighestIsPresent)
            .with_rule(HighestNotOnFloor)
            .with_rule(PalletQuota::new(config.pallets_per_colour))
    }

    /// Append a rule to run after all existing ones.
    #[must_use]
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Codes of the rules in the order they run.
    #[must_use]
    pub fn codes(&self) -> Vec<ErrorCode> {
        self.rules.iter().map(|rule| rule.code()).collect()
    }

    /// Run every rule in order.
    ///
    /// # Errors
    ///
    /// Returns the failure of the first rule that finds a violation.
    pub fn validate(&self, districts: &NormalizedDistricts) -> Result<(), InvalidScoresheet> {
        for rule in &self.rules {
            tracing::trace!(code = %rule.code(), "checking rule");
            if let Some(message) = rule.find_violation(districts) {
                return Err(InvalidScoresheet::new(rule.code(), message));
            }
        }
        Ok(())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::standard(&ScoringConfig::default())
    }
}

/// The valid colour symbols, quoted and joined with "or".
fn colour_choices() -> String {
    join_or(ZoneColour::all().iter().map(|c| quoted(c.symbol())))
}
