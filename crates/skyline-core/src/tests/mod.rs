//! Scenario and property tests for scoring and validation.
//!
//! # Test Structure
//!
//! - `scoring.rs`: Per-district scoring scenarios and the template scoresheet
//! - `validation.rs`: Invalid and impossible scoresheets
//! - `properties.rs`: Property tests over generated scoresheets
//! - `helpers.rs`: Test setup utilities

mod helpers;
mod properties;

pub use helpers::*;
