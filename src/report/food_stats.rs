use std::collections::{BTreeMap, HashMap, HashSet};

use crate::models::{normalize_food_name, FlaggedFood, FoodEntry, NutritionFacts};

use super::round_one_decimal;
use super::types::{AverageMacros, FoodStats, FrequentFood, NutritionTotals};
use super::window::Timestamped;

impl NutritionTotals {
    fn add(&mut self, facts: &NutritionFacts) {
        self.calories += facts.calories.unwrap_or(0.0);
        self.protein += facts.protein.unwrap_or(0.0);
        self.carbs += facts.carbs.unwrap_or(0.0);
        self.fat += facts.fat.unwrap_or(0.0);
        self.fiber += facts.fiber.unwrap_or(0.0);
        self.sugar += facts.sugar.unwrap_or(0.0);
        self.sodium += facts.sodium.unwrap_or(0.0);
    }
}

pub fn nutrition_totals(entries: &[&FoodEntry]) -> NutritionTotals {
    let mut totals = NutritionTotals::default();
    for entry in entries {
        totals.add(&entry.nutrition);
    }
    totals
}

pub fn average_macros(entries: &[&FoodEntry]) -> Option<AverageMacros> {
    if entries.is_empty() {
        return None;
    }
    let totals = nutrition_totals(entries);
    let n = entries.len() as f64;
    Some(AverageMacros {
        calories_per_day: (totals.calories / n).round() as i64,
        protein_per_day: round_one_decimal(totals.protein / n),
        carbs_per_day: round_one_decimal(totals.carbs / n),
        fat_per_day: round_one_decimal(totals.fat / n),
        fiber_per_day: round_one_decimal(totals.fiber / n),
        sugar_per_day: round_one_decimal(totals.sugar / n),
        sodium_per_day: round_one_decimal(totals.sodium / n),
    })
}

/// Most-logged food, names compared case-insensitively. On a tie the food
/// encountered first in `entries` wins; its first spelling is reported.
pub fn most_frequent_food(entries: &[&FoodEntry]) -> Option<FrequentFood> {
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let key = normalize_food_name(&entry.food_name);
        match index.get(&key) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(key, order.len());
                order.push((entry.food_name.clone(), 1));
            }
        }
    }

    let mut best: Option<FrequentFood> = None;
    for (food, count) in order {
        if best.as_ref().map_or(true, |b| count > b.count) {
            best = Some(FrequentFood { food, count });
        }
    }
    best
}

pub fn compute_food_stats(entries: &[&FoodEntry], flagged_foods: &[FlaggedFood]) -> FoodStats {
    let unique_foods = entries
        .iter()
        .map(|e| normalize_food_name(&e.food_name))
        .collect::<HashSet<_>>()
        .len();

    let flagged_keys: HashSet<String> = flagged_foods.iter().map(FlaggedFood::key).collect();
    let flagged_foods_consumed = entries
        .iter()
        .filter(|e| flagged_keys.contains(&normalize_food_name(&e.food_name)))
        .count();

    let mut foods_by_day = BTreeMap::new();
    for entry in entries {
        *foods_by_day.entry(entry.day()).or_insert(0) += 1;
    }

    FoodStats {
        total_entries: entries.len(),
        unique_foods,
        flagged_foods_consumed,
        total_nutrition: nutrition_totals(entries),
        average_macros: average_macros(entries),
        most_frequent_food: most_frequent_food(entries),
        foods_by_day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{FlagReason, FlagSeverity};
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, day, hour, 0, 0).unwrap()
    }

    fn food(name: &str, day: u32, calories: Option<f64>, protein: Option<f64>) -> FoodEntry {
        FoodEntry::new(name, at(day, 12)).with_nutrition(NutritionFacts {
            calories,
            protein,
            ..Default::default()
        })
    }

    #[test]
    fn peanut_butter_spellings_are_one_food() {
        let entries = vec![
            food("Peanut Butter", 1, None, None),
            food("peanut butter", 2, None, None),
            food("Jam", 2, None, None),
        ];
        let refs: Vec<&FoodEntry> = entries.iter().collect();
        let stats = compute_food_stats(&refs, &[]);
        assert_eq!(stats.unique_foods, 2);
        assert_eq!(
            stats.most_frequent_food,
            Some(FrequentFood { food: "Peanut Butter".into(), count: 2 })
        );
    }

    #[test]
    fn most_frequent_tie_goes_to_first_seen() {
        let entries = vec![
            food("Rice", 1, None, None),
            food("Beans", 1, None, None),
            food("beans", 2, None, None),
            food("rice", 2, None, None),
        ];
        let refs: Vec<&FoodEntry> = entries.iter().collect();
        let top = most_frequent_food(&refs).unwrap();
        assert_eq!(top.food, "Rice");
        assert_eq!(top.count, 2);
    }

    #[test]
    fn averages_round_and_skip_missing_fields() {
        let entries = vec![
            food("A", 1, Some(101.0), Some(10.0)),
            food("B", 1, Some(100.0), None),
            food("C", 2, None, Some(0.25)),
        ];
        let refs: Vec<&FoodEntry> = entries.iter().collect();
        let avg = average_macros(&refs).unwrap();
        assert_eq!(avg.calories_per_day, 67);
        assert_eq!(avg.protein_per_day, 3.4);
        assert_eq!(avg.fat_per_day, 0.0);
    }

    #[test]
    fn flagged_consumption_and_day_grouping() {
        let now = at(1, 0);
        let flags = vec![FlaggedFood::new("milk", FlagReason::Intolerance, FlagSeverity::Low, now)];
        let entries = vec![
            food("Milk", 1, None, None),
            food("MILK", 3, None, None),
            food("Oat milk", 3, None, None),
        ];
        let refs: Vec<&FoodEntry> = entries.iter().collect();
        let stats = compute_food_stats(&refs, &flags);
        assert_eq!(stats.flagged_foods_consumed, 2);
        assert_eq!(stats.foods_by_day.len(), 2);
        assert_eq!(stats.foods_by_day[&NaiveDate::from_ymd_opt(2026, 5, 3).unwrap()], 2);
    }

    #[test]
    fn empty_entries_produce_zero_stats() {
        let stats = compute_food_stats(&[], &[]);
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.unique_foods, 0);
        assert!(stats.average_macros.is_none());
        assert!(stats.most_frequent_food.is_none());
        assert_eq!(stats.total_nutrition, NutritionTotals::default());
    }
}
