use rusqlite::Connection;

use crate::db::DatabaseError;
use crate::models::*;

use super::{get_flagged_foods, get_food_entries, get_symptom_entries};

/// The three collections the engines read, loaded in one pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiarySnapshot {
    /// Newest first.
    pub food_entries: Vec<FoodEntry>,
    /// Newest first.
    pub symptom_entries: Vec<SymptomEntry>,
    pub flagged_foods: Vec<FlaggedFood>,
}

pub fn load_diary_snapshot(conn: &Connection) -> Result<DiarySnapshot, DatabaseError> {
    let snapshot = DiarySnapshot {
        food_entries: get_food_entries(conn)?,
        symptom_entries: get_symptom_entries(conn)?,
        flagged_foods: get_flagged_foods(conn)?,
    };
    tracing::debug!(
        foods = snapshot.food_entries.len(),
        symptoms = snapshot.symptom_entries.len(),
        flagged = snapshot.flagged_foods.len(),
        "Diary snapshot loaded"
    );
    Ok(snapshot)
}
