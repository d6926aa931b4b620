//! Scoresheet validation errors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Machine-readable reason a scoresheet was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// District names do not match the expected set.
    InvalidDistricts,
    /// A "highest" entry is not a single zone colour.
    InvalidHighestPallet,
    /// A pallet is not a zone colour.
    InvalidPallets,
    /// A "highest" colour has no pallets in its district.
    ImpossibleHighestPallet,
    /// A lone pallet on the floor is marked as highest.
    ImpossibleHighestSinglePallet,
    /// More pallets of a colour than exist in the arena.
    TooManyPallets,
}

impl ErrorCode {
    /// The stable string form used by calling tooling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidDistricts => "invalid_districts",
            ErrorCode::InvalidHighestPallet => "invalid_highest_pallet",
            ErrorCode::InvalidPallets => "invalid_pallets",
            ErrorCode::ImpossibleHighestPallet => "impossible_highest_pallet",
            ErrorCode::ImpossibleHighestSinglePallet => "impossible_highest_single_pallet",
            ErrorCode::TooManyPallets => "too_many_pallets",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scoresheet that is not internally consistent.
///
/// Carries the code of the first rule which failed and a detail message naming
/// every offending district or colour for that rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct InvalidScoresheet {
    /// Which rule failed.
    pub code: ErrorCode,
    /// Human readable detail.
    pub message: String,
}

impl InvalidScoresheet {
    /// Create a new validation failure.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
