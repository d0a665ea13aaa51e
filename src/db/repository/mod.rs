//! Repository layer: table-scoped database operations.
//!
//! Timestamps are stored as RFC 3339 UTC text with a fixed nanosecond width,
//! so lexical order in SQL matches chronological order.

mod evaluation;
mod flagged;
mod food;
mod profile;
mod snapshot;
mod symptom;

use chrono::{DateTime, SecondsFormat, Utc};

use super::DatabaseError;

pub use evaluation::*;
pub use flagged::*;
pub use food::*;
pub use profile::*;
pub use snapshot::*;
pub use symptom::*;

pub(crate) fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub(crate) fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    DateTime::parse_from_rfc3339(s)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| DatabaseError::ConstraintViolation(format!("bad timestamp {s:?}: {e}")))
}
