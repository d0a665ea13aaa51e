use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};

use crate::config::CORRELATION_WINDOW_HOURS;
use crate::models::{FlaggedFood, FoodEntry, SymptomEntry};

use super::types::Correlation;
use super::window::CorrelationWindow;

/// For each flagged food, counts the symptoms logged within the correlation
/// window of any time it was eaten. Flagged foods never eaten, or with no
/// nearby symptoms, are left out. Sorted by confidence, highest first;
/// equal confidences keep flag order.
///
/// Meal times are sorted once per flagged food and each symptom is matched
/// by binary search, giving the same counts as comparing every pair.
pub fn analyze_correlations(
    food_entries: &[&FoodEntry],
    symptom_entries: &[&SymptomEntry],
    flagged_foods: &[FlaggedFood],
    window: CorrelationWindow,
) -> Vec<Correlation> {
    let span = Duration::hours(CORRELATION_WINDOW_HOURS);
    let mut correlations = Vec::new();

    for flag in flagged_foods {
        let mut times_eaten: Vec<DateTime<Utc>> = food_entries
            .iter()
            .filter(|e| flag.matches(&e.food_name))
            .map(|e| e.timestamp)
            .collect();
        if times_eaten.is_empty() {
            continue;
        }
        times_eaten.sort();

        let related: Vec<&SymptomEntry> = symptom_entries
            .iter()
            .copied()
            .filter(|s| window.matches_any(&times_eaten, s.timestamp, span))
            .collect();
        if related.is_empty() {
            continue;
        }

        let mut seen = HashSet::new();
        let symptom_types: Vec<String> = related
            .iter()
            .filter(|s| seen.insert(s.type_key()))
            .map(|s| s.symptom_type.clone())
            .collect();

        let ratio = related.len() as f64 / times_eaten.len() as f64;
        let confidence = ((ratio * 100.0).round() as u32).clamp(1, 100);

        correlations.push(Correlation {
            food: flag.food_name.clone(),
            reason: flag.reason,
            times_eaten: times_eaten.len(),
            related_symptoms: related.len(),
            symptom_types,
            confidence,
        });
    }

    correlations.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    correlations
}
