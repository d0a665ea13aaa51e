use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Key used whenever two food names must be treated as the same food.
pub fn normalize_food_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Optional per-entry nutrition, as returned by the nutrition lookup
/// providers or typed in by the user. Absent fields count as zero in totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionFacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodEntry {
    pub id: String,
    pub food_name: String,
    #[serde(flatten)]
    pub nutrition: NutritionFacts,
    #[serde(default)]
    pub meal_type: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl FoodEntry {
    /// New entry with a freshly generated id and no nutrition data.
    pub fn new(food_name: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            food_name: food_name.into(),
            nutrition: NutritionFacts::default(),
            meal_type: None,
            notes: None,
            timestamp,
        }
    }

    pub fn with_nutrition(mut self, nutrition: NutritionFacts) -> Self {
        self.nutrition = nutrition;
        self
    }

    pub fn with_meal_type(mut self, meal_type: impl Into<String>) -> Self {
        self.meal_type = Some(meal_type.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// True when both names refer to the same food (case-insensitive, exact).
    pub fn is_same_food(&self, other_name: &str) -> bool {
        normalize_food_name(&self.food_name) == normalize_food_name(other_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn same_food_ignores_case_and_padding() {
        let t = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
        let entry = FoodEntry::new("Peanut Butter", t);
        assert!(entry.is_same_food("peanut butter"));
        assert!(entry.is_same_food("  PEANUT BUTTER "));
        assert!(!entry.is_same_food("peanut"));
    }

    #[test]
    fn serializes_with_camel_case_and_flat_nutrition() {
        let t = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
        let entry = FoodEntry::new("Oatmeal", t).with_nutrition(NutritionFacts {
            calories: Some(150.0),
            ..Default::default()
        });
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["foodName"], "Oatmeal");
        assert_eq!(json["calories"], 150.0);
        assert!(json.get("protein").is_none());
    }

    #[test]
    fn deserializes_entry_without_optional_fields() {
        let json = r#"{"id":"1700000000000","foodName":"Toast","timestamp":"2026-03-01T08:00:00Z"}"#;
        let entry: FoodEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "1700000000000");
        assert_eq!(entry.nutrition, NutritionFacts::default());
        assert!(entry.notes.is_none());
    }
}
