use std::str::FromStr;

use rusqlite::{params, Connection, OptionalExtension};

use super::{format_timestamp, parse_timestamp};
use crate::db::DatabaseError;
use crate::models::enums::*;
use crate::models::*;

/// Flags a food, or updates the reason and severity of an existing flag
/// with the same normalized name. `date_added` of an existing flag is kept.
pub fn flag_food(conn: &Connection, flag: &FlaggedFood) -> Result<FlaggedFood, DatabaseError> {
    let key = flag.key();
    conn.execute(
        "INSERT INTO flagged_foods (food_key, food_name, reason, severity, date_added, last_updated)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(food_key) DO UPDATE SET
            food_name = excluded.food_name,
            reason = excluded.reason,
            severity = excluded.severity,
            last_updated = excluded.last_updated",
        params![
            key,
            flag.food_name,
            flag.reason.as_str(),
            flag.severity.as_str(),
            format_timestamp(&flag.date_added),
            format_timestamp(&flag.last_updated),
        ],
    )?;
    get_flagged_food(conn, &key)?.ok_or_else(|| DatabaseError::NotFound {
        entity_type: "FlaggedFood".into(),
        id: key,
    })
}

/// Removes the flag for `food_name` (case-insensitive). Returns whether a
/// flag existed.
pub fn unflag_food(conn: &Connection, food_name: &str) -> Result<bool, DatabaseError> {
    let deleted = conn.execute(
        "DELETE FROM flagged_foods WHERE food_key = ?1",
        params![normalize_food_name(food_name)],
    )?;
    Ok(deleted > 0)
}

/// Flagged foods in the order they were first flagged.
pub fn get_flagged_foods(conn: &Connection) -> Result<Vec<FlaggedFood>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT food_name, reason, severity, date_added, last_updated
         FROM flagged_foods ORDER BY rowid",
    )?;
    let rows = stmt.query_map([], flagged_row)?;

    let mut flags = Vec::new();
    for row in rows {
        flags.push(row_to_flagged(row?)?);
    }
    Ok(flags)
}

pub fn get_flagged_food(
    conn: &Connection,
    food_name: &str,
) -> Result<Option<FlaggedFood>, DatabaseError> {
    let row = conn
        .query_row(
            "SELECT food_name, reason, severity, date_added, last_updated
             FROM flagged_foods WHERE food_key = ?1",
            params![normalize_food_name(food_name)],
            flagged_row,
        )
        .optional()?;
    row.map(row_to_flagged).transpose()
}

pub fn is_food_flagged(conn: &Connection, food_name: &str) -> Result<bool, DatabaseError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM flagged_foods WHERE food_key = ?1",
        params![normalize_food_name(food_name)],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

type FlaggedRow = (String, String, String, String, String);

fn flagged_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<FlaggedRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
}

fn row_to_flagged(row: FlaggedRow) -> Result<FlaggedFood, DatabaseError> {
    let (food_name, reason, severity, date_added, last_updated) = row;
    Ok(FlaggedFood {
        food_name,
        reason: FlagReason::from_str(&reason)?,
        severity: FlagSeverity::from_str(&severity)?,
        date_added: parse_timestamp(&date_added)?,
        last_updated: parse_timestamp(&last_updated)?,
    })
}
