//! Static allergen vocabulary and substitute-food tables.
//!
//! The catalog is the boundary adapter from provider allergen tags to
//! display names and detects allergens in free-text ingredient lists. The
//! alternatives tables back the diet recommendations shown for flagged foods.

mod alternatives;
mod catalog;

pub use alternatives::*;
pub use catalog::*;
