//! Day-level views over the diary: what was logged on a date, which dates
//! have anything, and how each day should be marked.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::models::enums::DayMark;
use crate::models::{FoodEntry, SymptomEntry};
use crate::report::Timestamped;

/// One diary line, food or symptom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "entry", rename_all = "lowercase")]
pub enum DiaryItem<'a> {
    Food(&'a FoodEntry),
    Symptom(&'a SymptomEntry),
}

impl DiaryItem<'_> {
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Food(entry) => entry.timestamp,
            Self::Symptom(entry) => entry.timestamp,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Food(entry) => &entry.id,
            Self::Symptom(entry) => &entry.id,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub food_count: usize,
    pub symptom_count: usize,
    pub total_calories: f64,
}

/// Entries on a UTC calendar day, oldest first. Foods sort before symptoms
/// logged at the same instant.
pub fn entries_on_date<'a>(
    food_entries: &'a [FoodEntry],
    symptom_entries: &'a [SymptomEntry],
    date: NaiveDate,
) -> Vec<DiaryItem<'a>> {
    let mut items: Vec<DiaryItem<'a>> = food_entries
        .iter()
        .filter(|e| e.day() == date)
        .map(DiaryItem::Food)
        .chain(
            symptom_entries
                .iter()
                .filter(|e| e.day() == date)
                .map(DiaryItem::Symptom),
        )
        .collect();
    items.sort_by_key(|item| item.timestamp());
    items
}

/// Every day with at least one entry, ascending.
pub fn dates_with_entries(
    food_entries: &[FoodEntry],
    symptom_entries: &[SymptomEntry],
) -> Vec<NaiveDate> {
    let days: BTreeSet<NaiveDate> = food_entries
        .iter()
        .map(Timestamped::day)
        .chain(symptom_entries.iter().map(Timestamped::day))
        .collect();
    days.into_iter().collect()
}

pub fn calendar_marks(
    food_entries: &[FoodEntry],
    symptom_entries: &[SymptomEntry],
) -> BTreeMap<NaiveDate, DayMark> {
    let mut marks: BTreeMap<NaiveDate, DayMark> = BTreeMap::new();
    for day in food_entries.iter().map(Timestamped::day) {
        marks.insert(day, DayMark::Food);
    }
    for day in symptom_entries.iter().map(Timestamped::day) {
        marks
            .entry(day)
            .and_modify(|mark| {
                if *mark == DayMark::Food {
                    *mark = DayMark::Both;
                }
            })
            .or_insert(DayMark::Symptom);
    }
    marks
}

/// Counts and calorie total for one day.
pub fn day_summary(
    food_entries: &[FoodEntry],
    symptom_entries: &[SymptomEntry],
    date: NaiveDate,
) -> DaySummary {
    let mut summary = DaySummary::default();
    for entry in food_entries.iter().filter(|e| e.day() == date) {
        summary.food_count += 1;
        summary.total_calories += entry.nutrition.calories.unwrap_or(0.0);
    }
    summary.symptom_count = symptom_entries.iter().filter(|e| e.day() == date).count();
    summary
}
