use std::collections::{BTreeMap, HashMap};

use crate::config::DEFAULT_SEVERITY;
use crate::models::SymptomEntry;

use super::round_one_decimal;
use super::types::{SymptomStats, SymptomTypeCount};
use super::window::Timestamped;

/// Mean severity on the 0-10 scale, one decimal. Entries without a
/// severity count as `DEFAULT_SEVERITY`.
pub fn average_severity(entries: &[&SymptomEntry]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }
    let total: f64 = entries
        .iter()
        .map(|e| e.severity.map_or(DEFAULT_SEVERITY, |s| s.numeric()))
        .sum();
    Some(round_one_decimal(total / entries.len() as f64))
}

/// Counts per symptom type (case-insensitive), in first-seen order with
/// the first spelling kept.
pub fn group_by_type(entries: &[&SymptomEntry]) -> Vec<SymptomTypeCount> {
    let mut groups: Vec<SymptomTypeCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for entry in entries {
        let key = entry.type_key();
        match index.get(&key) {
            Some(&i) => groups[i].count += 1,
            None => {
                index.insert(key, groups.len());
                groups.push(SymptomTypeCount {
                    symptom_type: entry.symptom_type.clone(),
                    count: 1,
                });
            }
        }
    }
    groups
}

pub fn compute_symptom_stats(entries: &[&SymptomEntry]) -> SymptomStats {
    let symptoms_by_type = group_by_type(entries);

    let mut symptoms_by_day = BTreeMap::new();
    for entry in entries {
        *symptoms_by_day.entry(entry.day()).or_insert(0) += 1;
    }

    SymptomStats {
        total_entries: entries.len(),
        unique_symptoms: symptoms_by_type.len(),
        symptoms_by_type,
        symptoms_by_day,
        average_severity: average_severity(entries),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::SeverityLevel;
    use crate::models::Severity;
    use chrono::{TimeZone, Utc};

    fn symptom(kind: &str, severity: Option<Severity>) -> SymptomEntry {
        let mut entry = SymptomEntry::new(kind, Utc.with_ymd_and_hms(2026, 5, 2, 9, 0, 0).unwrap());
        entry.severity = severity;
        entry
    }

    #[test]
    fn missing_severity_defaults_to_five() {
        let entries = vec![symptom("Hives", None), symptom("Hives", Some(Severity::Score(8.0)))];
        let refs: Vec<&SymptomEntry> = entries.iter().collect();
        assert_eq!(average_severity(&refs), Some(6.5));
    }

    #[test]
    fn categorical_and_numeric_severity_mix() {
        let entries = vec![
            symptom("Nausea", Some(Severity::Level(SeverityLevel::Mild))),
            symptom("Nausea", Some(Severity::Level(SeverityLevel::Severe))),
            symptom("Nausea", Some(Severity::Score(2.0))),
        ];
        let refs: Vec<&SymptomEntry> = entries.iter().collect();
        // (3 + 8 + 2) / 3
        assert_eq!(average_severity(&refs), Some(4.3));
    }

    #[test]
    fn grouping_ignores_case() {
        let entries = vec![symptom("Bloating", None), symptom("bloating", None), symptom("Gas", None)];
        let refs: Vec<&SymptomEntry> = entries.iter().collect();
        let stats = compute_symptom_stats(&refs);
        assert_eq!(stats.unique_symptoms, 2);
        assert_eq!(stats.symptoms_by_type[0].symptom_type, "Bloating");
        assert_eq!(stats.symptoms_by_type[0].count, 2);
        assert_eq!(stats.symptoms_by_day.values().sum::<usize>(), 3);
    }

    #[test]
    fn empty_symptoms_have_no_average() {
        let stats = compute_symptom_stats(&[]);
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.unique_symptoms, 0);
        assert!(stats.average_severity.is_none());
    }
}
