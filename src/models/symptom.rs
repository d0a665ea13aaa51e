use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::SeverityLevel;

/// Severity as recorded: a categorical level from the quick-log screen or a
/// numeric 0-10 score from the detailed form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Severity {
    Level(SeverityLevel),
    Score(f64),
}

impl Severity {
    /// Value on the 0-10 scale used for averaging.
    pub fn numeric(&self) -> f64 {
        match self {
            Self::Level(level) => level.numeric(),
            Self::Score(score) if score.is_finite() => score.clamp(0.0, 10.0),
            Self::Score(_) => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomEntry {
    pub id: String,
    #[serde(alias = "symptomName")]
    pub symptom_type: String,
    #[serde(default)]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub notes: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl SymptomEntry {
    pub fn new(symptom_type: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            symptom_type: symptom_type.into(),
            severity: None,
            notes: None,
            timestamp,
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Lowercased symptom type, the grouping key for statistics.
    pub fn type_key(&self) -> String {
        self.symptom_type.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_accepts_label_or_number() {
        let level: Severity = serde_json::from_str("\"Moderate\"").unwrap();
        assert_eq!(level, Severity::Level(SeverityLevel::Moderate));
        let score: Severity = serde_json::from_str("7").unwrap();
        assert_eq!(score, Severity::Score(7.0));
    }

    #[test]
    fn numeric_score_is_clamped() {
        assert_eq!(Severity::Score(14.0).numeric(), 10.0);
        assert_eq!(Severity::Score(-2.0).numeric(), 0.0);
        assert_eq!(Severity::Score(f64::NAN).numeric(), 0.0);
        assert_eq!(Severity::Level(SeverityLevel::Severe).numeric(), 8.0);
    }

    #[test]
    fn symptom_name_alias_is_accepted() {
        let json = r#"{"id":"s1","symptomName":"Hives","severity":"mild","timestamp":"2026-03-01T10:00:00Z"}"#;
        let entry: SymptomEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.symptom_type, "Hives");
        assert_eq!(entry.severity, Some(Severity::Level(SeverityLevel::Mild)));
    }
}
