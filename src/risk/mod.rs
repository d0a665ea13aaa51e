//! Allergy risk scorer.
//!
//! A purely additive, deterministic score over fixed weight tables,
//! classified into Low / Medium / High with a ranked list of reasons.
//! Persisting the outcome as an evaluation history record is left to
//! the caller.

mod scorer;
pub mod tables;
mod types;

pub use scorer::*;
pub use types::*;
