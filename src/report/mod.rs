//! Date-ranged diary report: food statistics, symptom statistics and
//! flagged-food/symptom correlations, plus a text summary.
//!
//! Everything here is pure. Callers load a `DiarySnapshot` (or hold the
//! collections in memory) and pass slices in.

mod correlations;
mod food_stats;
mod summary;
mod symptom_stats;
mod types;
mod window;

pub use correlations::*;
pub use food_stats::*;
pub use summary::*;
pub use symptom_stats::*;
pub use types::*;
pub use window::*;

use chrono::{DateTime, Utc};

use crate::models::{FlaggedFood, FoodEntry, SymptomEntry};

pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Report over `range` with the default (symmetric) correlation window.
pub fn generate_report(
    food_entries: &[FoodEntry],
    symptom_entries: &[SymptomEntry],
    flagged_foods: &[FlaggedFood],
    range: &ReportRange,
    generated_at: DateTime<Utc>,
) -> Report {
    generate_report_with_options(
        food_entries,
        symptom_entries,
        flagged_foods,
        range,
        generated_at,
        &ReportOptions::default(),
    )
}

pub fn generate_report_with_options(
    food_entries: &[FoodEntry],
    symptom_entries: &[SymptomEntry],
    flagged_foods: &[FlaggedFood],
    range: &ReportRange,
    generated_at: DateTime<Utc>,
    options: &ReportOptions,
) -> Report {
    let foods = range.filter(food_entries);
    let symptoms = range.filter(symptom_entries);

    let food_stats = compute_food_stats(&foods, flagged_foods);
    let symptom_stats = compute_symptom_stats(&symptoms);
    let correlations = analyze_correlations(&foods, &symptoms, flagged_foods, options.window);
    let summary = render_summary(&food_stats, &symptom_stats, &correlations);

    tracing::debug!(
        foods = foods.len(),
        symptoms = symptoms.len(),
        flagged = flagged_foods.len(),
        correlations = correlations.len(),
        "Report generated"
    );

    Report {
        date_range: *range,
        generated_at,
        food_stats,
        symptom_stats,
        correlations,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{FlagReason, FlagSeverity};
    use chrono::{Duration, NaiveDate, TimeZone};

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap()
    }

    fn march(from: u32, to: u32) -> ReportRange {
        ReportRange::days(
            NaiveDate::from_ymd_opt(2026, 3, from).unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, to).unwrap(),
        )
    }

    #[test]
    fn empty_diary_gives_empty_report() {
        let report = generate_report(&[], &[], &[], &march(1, 31), at(31, 12));
        assert_eq!(report.food_stats.total_entries, 0);
        assert!(report.food_stats.most_frequent_food.is_none());
        assert!(report.food_stats.average_macros.is_none());
        assert_eq!(report.symptom_stats.total_entries, 0);
        assert!(report.correlations.is_empty());
        assert!(report.summary.contains("Total food entries: 0"));
    }

    #[test]
    fn entries_outside_range_are_ignored() {
        let foods = vec![
            FoodEntry::new("Shrimp", at(2, 12)),
            FoodEntry::new("Shrimp", at(20, 12)),
        ];
        let symptoms = vec![SymptomEntry::new("Hives", at(20, 14))];
        let flags = vec![FlaggedFood::new(
            "shrimp",
            FlagReason::Allergen,
            FlagSeverity::High,
            at(1, 0),
        )];

        let report = generate_report(&foods, &symptoms, &flags, &march(10, 31), at(31, 0));
        assert_eq!(report.food_stats.total_entries, 1);
        assert_eq!(report.food_stats.flagged_foods_consumed, 1);
        assert_eq!(report.correlations.len(), 1);
        assert_eq!(report.correlations[0].times_eaten, 1);
        assert_eq!(report.correlations[0].confidence, 100);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = march(5, 6);
        let foods = vec![
            FoodEntry::new("Toast", range.start_date),
            FoodEntry::new("Jam", range.end_date),
            FoodEntry::new("Tea", range.end_date + Duration::nanoseconds(1)),
        ];
        let report = generate_report(&foods, &[], &[], &range, at(7, 0));
        assert_eq!(report.food_stats.total_entries, 2);
    }

    #[test]
    fn after_only_window_drops_preceding_symptoms() {
        let foods = vec![FoodEntry::new("Milk", at(10, 12))];
        let symptoms = vec![SymptomEntry::new("Bloating", at(10, 8))];
        let flags = vec![FlaggedFood::new(
            "Milk",
            FlagReason::Intolerance,
            FlagSeverity::Medium,
            at(1, 0),
        )];
        let options = ReportOptions {
            window: CorrelationWindow::AfterOnly,
        };
        let symmetric = generate_report(&foods, &symptoms, &flags, &march(1, 31), at(31, 0));
        let after_only = generate_report_with_options(
            &foods,
            &symptoms,
            &flags,
            &march(1, 31),
            at(31, 0),
            &options,
        );
        assert_eq!(symmetric.correlations.len(), 1);
        assert!(after_only.correlations.is_empty());
    }

    #[test]
    fn report_is_deterministic() {
        let foods = vec![
            FoodEntry::new("Eggs", at(3, 8)),
            FoodEntry::new("Bread", at(3, 12)),
            FoodEntry::new("Eggs", at(4, 8)),
        ];
        let symptoms = vec![
            SymptomEntry::new("Nausea", at(3, 10)),
            SymptomEntry::new("Rash", at(4, 20)),
        ];
        let flags = vec![
            FlaggedFood::new("Bread", FlagReason::Trigger, FlagSeverity::Low, at(1, 0)),
            FlaggedFood::new("Eggs", FlagReason::Allergen, FlagSeverity::High, at(1, 0)),
        ];
        let a = generate_report(&foods, &symptoms, &flags, &march(1, 31), at(31, 0));
        let b = generate_report(&foods, &symptoms, &flags, &march(1, 31), at(31, 0));
        assert_eq!(a, b);
    }
}
