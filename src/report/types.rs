use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::enums::FlagReason;

use super::window::{CorrelationWindow, ReportRange};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
}

/// Per-entry averages. Calories are whole numbers, the rest one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageMacros {
    pub calories_per_day: i64,
    pub protein_per_day: f64,
    pub carbs_per_day: f64,
    pub fat_per_day: f64,
    pub fiber_per_day: f64,
    pub sugar_per_day: f64,
    pub sodium_per_day: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequentFood {
    pub food: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodStats {
    pub total_entries: usize,
    pub unique_foods: usize,
    pub flagged_foods_consumed: usize,
    pub total_nutrition: NutritionTotals,
    pub average_macros: Option<AverageMacros>,
    pub most_frequent_food: Option<FrequentFood>,
    pub foods_by_day: BTreeMap<NaiveDate, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomTypeCount {
    pub symptom_type: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomStats {
    pub total_entries: usize,
    pub unique_symptoms: usize,
    pub symptoms_by_type: Vec<SymptomTypeCount>,
    pub symptoms_by_day: BTreeMap<NaiveDate, usize>,
    pub average_severity: Option<f64>,
}

/// A flagged food with symptoms logged near the times it was eaten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Correlation {
    pub food: String,
    pub reason: FlagReason,
    pub times_eaten: usize,
    pub related_symptoms: usize,
    pub symptom_types: Vec<String>,
    /// Integer percentage, 1..=100.
    pub confidence: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    pub window: CorrelationWindow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub date_range: ReportRange,
    pub generated_at: DateTime<Utc>,
    pub food_stats: FoodStats,
    pub symptom_stats: SymptomStats,
    pub correlations: Vec<Correlation>,
    pub summary: String,
}
