use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use super::format_timestamp;
use crate::db::DatabaseError;
use crate::models::*;

/// Replaces the stored profile.
pub fn save_user_profile(
    conn: &Connection,
    profile: &UserProfile,
    now: &DateTime<Utc>,
) -> Result<(), DatabaseError> {
    let payload = serde_json::to_string(profile)?;
    conn.execute(
        "INSERT INTO user_profile (id, payload, updated_at) VALUES (1, ?1, ?2)
         ON CONFLICT(id) DO UPDATE SET payload = excluded.payload, updated_at = excluded.updated_at",
        params![payload, format_timestamp(now)],
    )?;
    Ok(())
}

pub fn get_user_profile(conn: &Connection) -> Result<Option<UserProfile>, DatabaseError> {
    let payload: Option<String> = conn
        .query_row("SELECT payload FROM user_profile WHERE id = 1", [], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(payload
        .map(|p| serde_json::from_str::<UserProfile>(&p))
        .transpose()?)
}
