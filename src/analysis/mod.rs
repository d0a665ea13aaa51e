//! Symptom-driven allergen analysis.
//!
//! Works from a free-text symptom rather than from flagged foods: keyword
//! tables suggest allergen categories and the user's own log, looking back
//! a day from each matching symptom, adds weight to the ones it supports.

mod analyzer;
pub mod patterns;

pub use analyzer::*;
