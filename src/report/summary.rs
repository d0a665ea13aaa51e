use crate::config::SUMMARY_TOP_CORRELATIONS;

use super::types::{Correlation, FoodStats, SymptomStats};

/// Line-oriented text rendering of a report: food section, symptom section,
/// then the strongest correlations. `correlations` must already be ranked.
pub fn render_summary(
    food_stats: &FoodStats,
    symptom_stats: &SymptomStats,
    correlations: &[Correlation],
) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("Food Report:".into());
    lines.push(format!("- Total food entries: {}", food_stats.total_entries));
    lines.push(format!("- Unique foods consumed: {}", food_stats.unique_foods));
    if let Some(frequent) = &food_stats.most_frequent_food {
        lines.push(format!(
            "- Most frequent: {} ({}x)",
            frequent.food, frequent.count
        ));
    }
    if food_stats.flagged_foods_consumed > 0 {
        lines.push(format!(
            "- Flagged foods consumed: {}",
            food_stats.flagged_foods_consumed
        ));
    }

    lines.push(String::new());
    lines.push("Symptom Report:".into());
    lines.push(format!(
        "- Total symptom entries: {}",
        symptom_stats.total_entries
    ));
    lines.push(format!(
        "- Unique symptom types: {}",
        symptom_stats.unique_symptoms
    ));
    if let Some(avg) = symptom_stats.average_severity {
        lines.push(format!("- Average severity: {avg}/10"));
    }

    if !correlations.is_empty() {
        lines.push(String::new());
        lines.push("Potential Triggers:".into());
        for corr in correlations.iter().take(SUMMARY_TOP_CORRELATIONS) {
            lines.push(format!(
                "- {}: {}% confidence ({} symptoms near {} servings)",
                corr.food, corr.confidence, corr.related_symptoms, corr.times_eaten
            ));
        }
    }

    lines.join("\n")
}
