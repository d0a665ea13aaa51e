use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use super::{format_timestamp, parse_timestamp};
use crate::db::DatabaseError;
use crate::models::*;

const FOOD_COLUMNS: &str = "id, food_name, calories, protein, carbs, fat, fiber, sugar, sodium,
     meal_type, notes, timestamp";

pub fn insert_food_entry(conn: &Connection, entry: &FoodEntry) -> Result<(), DatabaseError> {
    let n = &entry.nutrition;
    conn.execute(
        "INSERT INTO food_entries (id, food_name, food_key, calories, protein, carbs, fat, fiber,
         sugar, sodium, meal_type, notes, timestamp)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            entry.id,
            entry.food_name,
            normalize_food_name(&entry.food_name),
            n.calories,
            n.protein,
            n.carbs,
            n.fat,
            n.fiber,
            n.sugar,
            n.sodium,
            entry.meal_type,
            entry.notes,
            format_timestamp(&entry.timestamp),
        ],
    )?;
    Ok(())
}

/// All food entries, newest first.
pub fn get_food_entries(conn: &Connection) -> Result<Vec<FoodEntry>, DatabaseError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {FOOD_COLUMNS} FROM food_entries ORDER BY timestamp DESC, rowid DESC"
    ))?;
    let rows = stmt.query_map([], food_row)?;
    food_rows_to_vec(rows)
}

/// Food entries with `from <= timestamp <= to`, newest first.
pub fn get_food_entries_in_range(
    conn: &Connection,
    from: &DateTime<Utc>,
    to: &DateTime<Utc>,
) -> Result<Vec<FoodEntry>, DatabaseError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {FOOD_COLUMNS} FROM food_entries WHERE timestamp BETWEEN ?1 AND ?2
         ORDER BY timestamp DESC, rowid DESC"
    ))?;
    let rows = stmt.query_map(
        params![format_timestamp(from), format_timestamp(to)],
        food_row,
    )?;
    food_rows_to_vec(rows)
}

/// Entries whose name matches `food_name` after trimming and lowercasing,
/// newest first.
pub fn get_food_entries_by_name(
    conn: &Connection,
    food_name: &str,
) -> Result<Vec<FoodEntry>, DatabaseError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {FOOD_COLUMNS} FROM food_entries WHERE food_key = ?1
         ORDER BY timestamp DESC, rowid DESC"
    ))?;
    let rows = stmt.query_map(params![normalize_food_name(food_name)], food_row)?;
    food_rows_to_vec(rows)
}

pub fn count_food_entries_by_name(
    conn: &Connection,
    food_name: &str,
) -> Result<usize, DatabaseError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM food_entries WHERE food_key = ?1",
        params![normalize_food_name(food_name)],
        |row| row.get(0),
    )?;
    Ok(count as usize)
}

/// Moves an entry to a corrected time.
pub fn update_food_timestamp(
    conn: &Connection,
    id: &str,
    timestamp: &DateTime<Utc>,
) -> Result<(), DatabaseError> {
    let updated = conn.execute(
        "UPDATE food_entries SET timestamp = ?1 WHERE id = ?2",
        params![format_timestamp(timestamp), id],
    )?;
    if updated == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "FoodEntry".into(),
            id: id.into(),
        });
    }
    Ok(())
}

pub fn delete_food_entry(conn: &Connection, id: &str) -> Result<(), DatabaseError> {
    let deleted = conn.execute("DELETE FROM food_entries WHERE id = ?1", params![id])?;
    if deleted == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "FoodEntry".into(),
            id: id.into(),
        });
    }
    Ok(())
}

/// Removes every food entry, returning how many were deleted.
pub fn clear_food_entries(conn: &Connection) -> Result<usize, DatabaseError> {
    Ok(conn.execute("DELETE FROM food_entries", [])?)
}

type FoodRow = (
    String, String,
    Option<f64>, Option<f64>, Option<f64>, Option<f64>,
    Option<f64>, Option<f64>, Option<f64>,
    Option<String>, Option<String>, String,
);

fn food_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<FoodRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
        row.get(7)?,
        row.get(8)?,
        row.get(9)?,
        row.get(10)?,
        row.get(11)?,
    ))
}

fn food_rows_to_vec(
    rows: rusqlite::MappedRows<'_, impl FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<FoodRow>>,
) -> Result<Vec<FoodEntry>, DatabaseError> {
    let mut entries = Vec::new();
    for row in rows {
        let (
            id, food_name, calories, protein, carbs, fat, fiber, sugar, sodium,
            meal_type, notes, timestamp,
        ) = row?;
        entries.push(FoodEntry {
            id,
            food_name,
            nutrition: NutritionFacts {
                calories,
                protein,
                carbs,
                fat,
                fiber,
                sugar,
                sodium,
            },
            meal_type,
            notes,
            timestamp: parse_timestamp(&timestamp)?,
        });
    }
    Ok(entries)
}
