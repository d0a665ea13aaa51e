use std::str::FromStr;

use rusqlite::{params, Connection};

use super::{format_timestamp, parse_timestamp};
use crate::db::DatabaseError;
use crate::models::*;
use crate::risk::RiskTier;

/// Appends a record. History is never updated in place.
pub fn append_evaluation(
    conn: &Connection,
    record: &EvaluationHistoryRecord,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO evaluation_history (id, symptom, food_name, meal_type, risk, confidence, evaluated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            record.id,
            record.symptom,
            record.food_name,
            record.meal_type,
            record.risk.as_str(),
            record.confidence,
            format_timestamp(&record.evaluated_at),
        ],
    )?;
    Ok(())
}

/// Every record, in append order.
pub fn get_evaluation_history(
    conn: &Connection,
) -> Result<Vec<EvaluationHistoryRecord>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, symptom, food_name, meal_type, risk, confidence, evaluated_at
         FROM evaluation_history ORDER BY seq",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, Option<String>>(3)?,
            row.get::<_, String>(4)?,
            row.get::<_, f64>(5)?,
            row.get::<_, String>(6)?,
        ))
    })?;

    let mut records = Vec::new();
    for row in rows {
        let (id, symptom, food_name, meal_type, risk, confidence, evaluated_at) = row?;
        records.push(EvaluationHistoryRecord {
            id,
            symptom,
            food_name,
            meal_type,
            risk: RiskTier::from_str(&risk)?,
            confidence,
            evaluated_at: parse_timestamp(&evaluated_at)?,
        });
    }
    Ok(records)
}
