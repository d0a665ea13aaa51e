use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{FlagReason, FlagSeverity};
use super::food::normalize_food_name;

/// A food the user marked as a suspect. Unique by normalized name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlaggedFood {
    pub food_name: String,
    pub reason: FlagReason,
    pub severity: FlagSeverity,
    pub date_added: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl FlaggedFood {
    pub fn new(
        food_name: impl Into<String>,
        reason: FlagReason,
        severity: FlagSeverity,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            food_name: food_name.into(),
            reason,
            severity,
            date_added: now,
            last_updated: now,
        }
    }

    pub fn key(&self) -> String {
        normalize_food_name(&self.food_name)
    }

    pub fn matches(&self, food_name: &str) -> bool {
        self.key() == normalize_food_name(food_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn flag_matches_case_insensitively() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let flag = FlaggedFood::new("Shrimp", FlagReason::Allergen, FlagSeverity::High, now);
        assert!(flag.matches("shrimp"));
        assert!(flag.matches("SHRIMP "));
        assert!(!flag.matches("shrimp cocktail"));
        assert_eq!(flag.key(), "shrimp");
    }

    #[test]
    fn serializes_reason_and_severity_lowercase() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let flag = FlaggedFood::new("Milk", FlagReason::Intolerance, FlagSeverity::Medium, now);
        let json = serde_json::to_value(&flag).unwrap();
        assert_eq!(json["reason"], "intolerance");
        assert_eq!(json["severity"], "medium");
        assert_eq!(json["foodName"], "Milk");
    }
}
