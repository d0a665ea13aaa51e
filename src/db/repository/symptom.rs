use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use super::{format_timestamp, parse_timestamp};
use crate::db::DatabaseError;
use crate::models::*;

pub fn insert_symptom_entry(conn: &Connection, entry: &SymptomEntry) -> Result<(), DatabaseError> {
    let severity = entry
        .severity
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?;
    conn.execute(
        "INSERT INTO symptom_entries (id, symptom_type, severity, notes, timestamp)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            entry.id,
            entry.symptom_type,
            severity,
            entry.notes,
            format_timestamp(&entry.timestamp),
        ],
    )?;
    Ok(())
}

/// All symptom entries, newest first.
pub fn get_symptom_entries(conn: &Connection) -> Result<Vec<SymptomEntry>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, symptom_type, severity, notes, timestamp
         FROM symptom_entries ORDER BY timestamp DESC, rowid DESC",
    )?;
    let rows = stmt.query_map([], symptom_row)?;
    symptom_rows_to_vec(rows)
}

pub fn get_symptom_entries_in_range(
    conn: &Connection,
    from: &DateTime<Utc>,
    to: &DateTime<Utc>,
) -> Result<Vec<SymptomEntry>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, symptom_type, severity, notes, timestamp
         FROM symptom_entries WHERE timestamp BETWEEN ?1 AND ?2
         ORDER BY timestamp DESC, rowid DESC",
    )?;
    let rows = stmt.query_map(
        params![format_timestamp(from), format_timestamp(to)],
        symptom_row,
    )?;
    symptom_rows_to_vec(rows)
}

pub fn delete_symptom_entry(conn: &Connection, id: &str) -> Result<(), DatabaseError> {
    let deleted = conn.execute("DELETE FROM symptom_entries WHERE id = ?1", params![id])?;
    if deleted == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "SymptomEntry".into(),
            id: id.into(),
        });
    }
    Ok(())
}

pub fn clear_symptom_entries(conn: &Connection) -> Result<usize, DatabaseError> {
    Ok(conn.execute("DELETE FROM symptom_entries", [])?)
}

type SymptomRow = (String, String, Option<String>, Option<String>, String);

fn symptom_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<SymptomRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
}

fn symptom_rows_to_vec(
    rows: rusqlite::MappedRows<'_, impl FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<SymptomRow>>,
) -> Result<Vec<SymptomEntry>, DatabaseError> {
    let mut entries = Vec::new();
    for row in rows {
        let (id, symptom_type, severity, notes, timestamp) = row?;
        entries.push(SymptomEntry {
            id,
            symptom_type,
            severity: severity
                .as_deref()
                .map(serde_json::from_str::<Severity>)
                .transpose()?,
            notes,
            timestamp: parse_timestamp(&timestamp)?,
        });
    }
    Ok(entries)
}
