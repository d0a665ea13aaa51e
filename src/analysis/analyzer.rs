use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::LOOKBACK_WINDOW_HOURS;
use crate::models::{FoodEntry, SymptomEntry};
use crate::report::within_lookback;

use super::patterns::{allergen_foods, categories_for_food, SYMPTOM_PATTERNS};

const EXACT_PATTERN_BONUS: u32 = 40;
const CONTAINED_PATTERN_BONUS: u32 = 20;
const PER_OCCURRENCE_BONUS: u32 = 10;
const MAX_OCCURRENCE_BONUS: u32 = 50;
const MAX_CONFIDENCE: u32 = 100;

/// What the user's own log says about an allergen category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPattern {
    /// Foods in the category eaten in the look-back window of a matching
    /// symptom, counted once per (symptom, food entry) pair.
    pub occurrences: usize,
    /// Distinct food names as logged, first-seen order.
    pub foods: Vec<String>,
    /// Day of the matching symptom, one per occurrence.
    pub dates: Vec<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllergenSuggestion {
    pub allergen: String,
    /// Representative foods for the category.
    pub foods: Vec<String>,
    /// Additive score capped at 100, not a probability.
    pub confidence: u32,
    pub user_pattern: Option<UserPattern>,
}

/// Suggests allergen categories for a free-text symptom.
///
/// Candidates come from symptom keywords that contain the query or are
/// contained in it. Each candidate is scored from the keyword table and from
/// foods the user ate in the 24 hours before logged symptoms matching the
/// query. Sorted by confidence, highest first; ties keep table order.
pub fn analyze_symptom(
    query: &str,
    symptom_entries: &[SymptomEntry],
    food_entries: &[FoodEntry],
) -> Vec<AllergenSuggestion> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let candidates = candidate_allergens(&query);
    let mut patterns = user_patterns(&query, symptom_entries, food_entries);

    let mut suggestions: Vec<AllergenSuggestion> = candidates
        .into_iter()
        .map(|allergen| {
            let user_pattern = patterns.remove(allergen);
            AllergenSuggestion {
                allergen: allergen.to_string(),
                foods: allergen_foods(allergen).iter().map(|f| f.to_string()).collect(),
                confidence: confidence(allergen, &query, user_pattern.as_ref()),
                user_pattern,
            }
        })
        .collect();

    suggestions.sort_by(|a, b| b.confidence.cmp(&a.confidence));

    tracing::debug!(
        query = %query,
        suggestions = suggestions.len(),
        "Symptom analysis complete"
    );

    suggestions
}

/// Allergen categories reachable from the query, deduplicated in table order.
fn candidate_allergens(query: &str) -> Vec<&'static str> {
    let mut found: Vec<&'static str> = Vec::new();
    for (symptom, allergens) in SYMPTOM_PATTERNS {
        if query.contains(symptom) || symptom.contains(query) {
            for allergen in *allergens {
                if !found.contains(allergen) {
                    found.push(allergen);
                }
            }
        }
    }
    found
}

/// Buckets foods eaten before each matching symptom into allergen categories.
fn user_patterns(
    query: &str,
    symptom_entries: &[SymptomEntry],
    food_entries: &[FoodEntry],
) -> HashMap<&'static str, UserPattern> {
    let window = Duration::hours(LOOKBACK_WINDOW_HOURS);
    let mut patterns: HashMap<&'static str, UserPattern> = HashMap::new();

    for symptom in symptom_entries
        .iter()
        .filter(|s| symptom_matches(s, query))
    {
        let day = symptom.timestamp.date_naive();
        for food in food_entries
            .iter()
            .filter(|f| within_lookback(f.timestamp, symptom.timestamp, window))
        {
            for category in categories_for_food(&food.food_name) {
                let pattern = patterns.entry(category).or_default();
                pattern.occurrences += 1;
                if !pattern.foods.contains(&food.food_name) {
                    pattern.foods.push(food.food_name.clone());
                }
                pattern.dates.push(day);
            }
        }
    }
    patterns
}

fn symptom_matches(entry: &SymptomEntry, query: &str) -> bool {
    entry.symptom_type.to_lowercase().contains(query)
        || entry
            .notes
            .as_deref()
            .is_some_and(|notes| notes.to_lowercase().contains(query))
}

fn confidence(allergen: &str, query: &str, user_pattern: Option<&UserPattern>) -> u32 {
    let mut score = 0u32;

    if SYMPTOM_PATTERNS
        .iter()
        .any(|(symptom, allergens)| *symptom == query && lists(allergens, allergen))
    {
        score += EXACT_PATTERN_BONUS;
    }

    if let Some(pattern) = user_pattern {
        let occurrences = u32::try_from(pattern.occurrences).unwrap_or(u32::MAX);
        score += occurrences
            .saturating_mul(PER_OCCURRENCE_BONUS)
            .min(MAX_OCCURRENCE_BONUS);
    }

    let contained = SYMPTOM_PATTERNS
        .iter()
        .filter(|(symptom, allergens)| query.contains(symptom) && lists(allergens, allergen))
        .count() as u32;
    score += CONTAINED_PATTERN_BONUS * contained;

    score.min(MAX_CONFIDENCE)
}

fn lists(allergens: &[&str], allergen: &str) -> bool {
    allergens.iter().any(|a| *a == allergen)
}
