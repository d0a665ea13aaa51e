//! `DiaryService`: the store plus the engines behind one handle.
//!
//! Every write holds the connection lock for its whole read-modify-write,
//! so concurrent callers never lose updates. Engine calls load a snapshot
//! under the lock and compute after releasing it.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use thiserror::Error;
use uuid::Uuid;

use crate::allergens::{generate_recommendations, DietRecommendation};
use crate::analysis::{self, AllergenSuggestion};
use crate::config;
use crate::db::{self, DatabaseError, DiarySnapshot};
use crate::models::enums::{FlagReason, FlagSeverity};
use crate::models::*;
use crate::report::{self, Report, ReportOptions, ReportRange};
use crate::risk::{evaluate_risk, RiskAssessment, RiskCase};

#[derive(Error, Debug)]
pub enum DiaryError {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
    #[error("Internal lock error")]
    LockFailed,
    #[error("Food name must not be empty")]
    EmptyFoodName,
    #[error("Symptom type must not be empty")]
    EmptySymptomType,
}

/// The logged case a risk evaluation is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationSubject {
    pub symptom: String,
    pub food_name: String,
    pub meal_type: Option<String>,
}

pub struct DiaryService {
    conn: Mutex<Connection>,
}

impl DiaryService {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Open (creating if needed) the diary database at `path`.
    pub fn open(path: &Path) -> Result<Self, DiaryError> {
        Ok(Self::new(db::open_database(path)?))
    }

    /// Open the diary at `config::database_path()`.
    pub fn open_default() -> Result<Self, DiaryError> {
        Self::open(&config::database_path())
    }

    pub fn in_memory() -> Result<Self, DiaryError> {
        Ok(Self::new(db::open_memory_database()?))
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, DiaryError> {
        self.conn.lock().map_err(|_| DiaryError::LockFailed)
    }

    // ── Diary entries ───────────────────────────────────────────────

    pub fn log_food(&self, entry: FoodEntry) -> Result<FoodEntry, DiaryError> {
        if entry.food_name.trim().is_empty() {
            return Err(DiaryError::EmptyFoodName);
        }
        let conn = self.conn()?;
        db::insert_food_entry(&conn, &entry)?;
        tracing::info!(id = %entry.id, food = %entry.food_name, "Food logged");
        Ok(entry)
    }

    pub fn log_symptom(&self, entry: SymptomEntry) -> Result<SymptomEntry, DiaryError> {
        if entry.symptom_type.trim().is_empty() {
            return Err(DiaryError::EmptySymptomType);
        }
        let conn = self.conn()?;
        db::insert_symptom_entry(&conn, &entry)?;
        tracing::info!(id = %entry.id, symptom = %entry.symptom_type, "Symptom logged");
        Ok(entry)
    }

    pub fn correct_food_time(&self, id: &str, timestamp: DateTime<Utc>) -> Result<(), DiaryError> {
        let conn = self.conn()?;
        db::update_food_timestamp(&conn, id, &timestamp)?;
        Ok(())
    }

    pub fn delete_food(&self, id: &str) -> Result<(), DiaryError> {
        let conn = self.conn()?;
        db::delete_food_entry(&conn, id)?;
        tracing::info!(id, "Food entry deleted");
        Ok(())
    }

    pub fn delete_symptom(&self, id: &str) -> Result<(), DiaryError> {
        let conn = self.conn()?;
        db::delete_symptom_entry(&conn, id)?;
        tracing::info!(id, "Symptom entry deleted");
        Ok(())
    }

    /// Empties both logs. Flags, history and profile are kept.
    pub fn clear_logs(&self) -> Result<(), DiaryError> {
        let conn = self.conn()?;
        let foods = db::clear_food_entries(&conn)?;
        let symptoms = db::clear_symptom_entries(&conn)?;
        tracing::warn!(foods, symptoms, "Diary logs cleared");
        Ok(())
    }

    pub fn food_entries(&self) -> Result<Vec<FoodEntry>, DiaryError> {
        let conn = self.conn()?;
        Ok(db::get_food_entries(&conn)?)
    }

    pub fn symptom_entries(&self) -> Result<Vec<SymptomEntry>, DiaryError> {
        let conn = self.conn()?;
        Ok(db::get_symptom_entries(&conn)?)
    }

    /// How many times a food was logged, names compared case-insensitively.
    pub fn times_logged(&self, food_name: &str) -> Result<usize, DiaryError> {
        let conn = self.conn()?;
        Ok(db::count_food_entries_by_name(&conn, food_name)?)
    }

    // ── Flags ───────────────────────────────────────────────────────

    pub fn flag_food(
        &self,
        food_name: &str,
        reason: FlagReason,
        severity: FlagSeverity,
    ) -> Result<FlaggedFood, DiaryError> {
        self.flag_food_at(food_name, reason, severity, Utc::now())
    }

    pub fn flag_food_at(
        &self,
        food_name: &str,
        reason: FlagReason,
        severity: FlagSeverity,
        now: DateTime<Utc>,
    ) -> Result<FlaggedFood, DiaryError> {
        let name = food_name.trim();
        if name.is_empty() {
            return Err(DiaryError::EmptyFoodName);
        }
        let conn = self.conn()?;
        let flag = db::flag_food(&conn, &FlaggedFood::new(name, reason, severity, now))?;
        tracing::info!(food = %flag.food_name, reason = %flag.reason, severity = %flag.severity, "Food flagged");
        Ok(flag)
    }

    pub fn unflag_food(&self, food_name: &str) -> Result<bool, DiaryError> {
        let conn = self.conn()?;
        let removed = db::unflag_food(&conn, food_name)?;
        if removed {
            tracing::info!(food = food_name, "Food unflagged");
        }
        Ok(removed)
    }

    pub fn flagged_foods(&self) -> Result<Vec<FlaggedFood>, DiaryError> {
        let conn = self.conn()?;
        Ok(db::get_flagged_foods(&conn)?)
    }

    pub fn is_food_flagged(&self, food_name: &str) -> Result<bool, DiaryError> {
        let conn = self.conn()?;
        Ok(db::is_food_flagged(&conn, food_name)?)
    }

    // ── Engines ─────────────────────────────────────────────────────

    pub fn snapshot(&self) -> Result<DiarySnapshot, DiaryError> {
        let conn = self.conn()?;
        Ok(db::load_diary_snapshot(&conn)?)
    }

    pub fn evaluate_and_record(
        &self,
        subject: &EvaluationSubject,
        case: &RiskCase,
    ) -> Result<(RiskAssessment, EvaluationHistoryRecord), DiaryError> {
        self.evaluate_and_record_at(subject, case, Utc::now())
    }

    /// Scores `case` and appends the outcome to the evaluation history.
    pub fn evaluate_and_record_at(
        &self,
        subject: &EvaluationSubject,
        case: &RiskCase,
        now: DateTime<Utc>,
    ) -> Result<(RiskAssessment, EvaluationHistoryRecord), DiaryError> {
        let assessment = evaluate_risk(case);
        let record = EvaluationHistoryRecord::new(
            Uuid::new_v4().to_string(),
            subject.symptom.clone(),
            subject.food_name.clone(),
            subject.meal_type.clone(),
            &assessment,
            now,
        );
        {
            let conn = self.conn()?;
            db::append_evaluation(&conn, &record)?;
        }
        tracing::info!(
            id = %record.id,
            risk = %assessment.risk.as_str(),
            score = assessment.score,
            "Risk evaluation recorded"
        );
        Ok((assessment, record))
    }

    pub fn evaluation_history(&self) -> Result<Vec<EvaluationHistoryRecord>, DiaryError> {
        let conn = self.conn()?;
        Ok(db::get_evaluation_history(&conn)?)
    }

    pub fn report(&self, range: &ReportRange) -> Result<Report, DiaryError> {
        self.report_at(range, &ReportOptions::default(), Utc::now())
    }

    pub fn report_at(
        &self,
        range: &ReportRange,
        options: &ReportOptions,
        now: DateTime<Utc>,
    ) -> Result<Report, DiaryError> {
        let snapshot = self.snapshot()?;
        let start = std::time::Instant::now();
        let report = report::generate_report_with_options(
            &snapshot.food_entries,
            &snapshot.symptom_entries,
            &snapshot.flagged_foods,
            range,
            now,
            options,
        );
        tracing::info!(
            correlations = report.correlations.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Report generated"
        );
        Ok(report)
    }

    pub fn analyze_symptom(&self, query: &str) -> Result<Vec<AllergenSuggestion>, DiaryError> {
        let snapshot = self.snapshot()?;
        Ok(analysis::analyze_symptom(
            query,
            &snapshot.symptom_entries,
            &snapshot.food_entries,
        ))
    }

    pub fn recommendations(&self) -> Result<Vec<DietRecommendation>, DiaryError> {
        let snapshot = self.snapshot()?;
        Ok(generate_recommendations(
            &snapshot.flagged_foods,
            &snapshot.food_entries,
        ))
    }

    // ── Profile ─────────────────────────────────────────────────────

    pub fn save_profile(&self, profile: &UserProfile) -> Result<(), DiaryError> {
        let conn = self.conn()?;
        db::save_user_profile(&conn, profile, &Utc::now())?;
        Ok(())
    }

    pub fn profile(&self) -> Result<Option<UserProfile>, DiaryError> {
        let conn = self.conn()?;
        Ok(db::get_user_profile(&conn)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::SeverityLevel;
    use crate::risk::RiskTier;
    use chrono::{Duration, NaiveDate, TimeZone};
    use std::sync::Arc;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, 14, 12, 0, 0).unwrap()
    }

    fn service() -> DiaryService {
        DiaryService::in_memory().unwrap()
    }

    #[test]
    fn blank_names_are_rejected() {
        let diary = service();
        assert!(matches!(
            diary.log_food(FoodEntry::new("  ", t0())),
            Err(DiaryError::EmptyFoodName)
        ));
        assert!(matches!(
            diary.log_symptom(SymptomEntry::new("", t0())),
            Err(DiaryError::EmptySymptomType)
        ));
        assert!(matches!(
            diary.flag_food_at(" ", FlagReason::Dislike, FlagSeverity::Low, t0()),
            Err(DiaryError::EmptyFoodName)
        ));
        assert!(diary.food_entries().unwrap().is_empty());
    }

    #[test]
    fn shrimp_and_hives_end_to_end() {
        let diary = service();
        diary.log_food(FoodEntry::new("Shrimp", t0())).unwrap();
        diary
            .log_symptom(
                SymptomEntry::new("Hives", t0() + Duration::hours(2))
                    .with_severity(Severity::Level(SeverityLevel::Moderate)),
            )
            .unwrap();
        diary
            .flag_food_at("Shrimp", FlagReason::Allergen, FlagSeverity::High, t0())
            .unwrap();

        let range = ReportRange::days(
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
        );
        let report = diary
            .report_at(&range, &ReportOptions::default(), t0())
            .unwrap();
        assert_eq!(report.correlations.len(), 1);
        assert_eq!(report.correlations[0].confidence, 100);
        assert_eq!(report.symptom_stats.average_severity, Some(5.0));
        assert_eq!(report.generated_at, t0());

        let suggestions = diary.analyze_symptom("hives").unwrap();
        assert_eq!(suggestions[0].allergen, "shellfish");

        let recs = diary.recommendations().unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].times_logged, 1);
    }

    #[test]
    fn evaluation_is_recorded_with_injected_clock() {
        let diary = service();
        let subject = EvaluationSubject {
            symptom: "Swelling".into(),
            food_name: "Peanut butter".into(),
            meal_type: Some("lunch".into()),
        };
        let case = RiskCase {
            symptoms: vec!["Swelling".into(), "Breathing issues".into()],
            previous_reaction: Some("Severe".into()),
            food_type: Some("Peanuts".into()),
            ..Default::default()
        };
        let (assessment, record) = diary.evaluate_and_record_at(&subject, &case, t0()).unwrap();

        assert_eq!(assessment.risk, RiskTier::High);
        assert_eq!(record.evaluated_at, t0());
        assert_eq!(record.confidence, assessment.confidence);
        assert!(Uuid::parse_str(&record.id).is_ok());
        assert_eq!(diary.evaluation_history().unwrap(), vec![record]);
    }

    #[test]
    fn unflag_and_delete_round_trip() {
        let diary = service();
        let entry = diary.log_food(FoodEntry::new("Bread", t0())).unwrap();
        diary
            .flag_food_at("bread", FlagReason::Intolerance, FlagSeverity::Medium, t0())
            .unwrap();
        assert!(diary.is_food_flagged("BREAD").unwrap());
        assert!(diary.unflag_food("Bread").unwrap());
        assert!(!diary.unflag_food("Bread").unwrap());

        diary.delete_food(&entry.id).unwrap();
        assert!(matches!(
            diary.delete_food(&entry.id),
            Err(DiaryError::Database(DatabaseError::NotFound { .. }))
        ));
    }

    #[test]
    fn corrected_time_changes_report_window() {
        let diary = service();
        let entry = diary.log_food(FoodEntry::new("Tea", t0())).unwrap();
        diary
            .correct_food_time(&entry.id, t0() - Duration::days(30))
            .unwrap();
        let range = ReportRange::new(t0() - Duration::days(1), t0() + Duration::days(1));
        let report = diary
            .report_at(&range, &ReportOptions::default(), t0())
            .unwrap();
        assert_eq!(report.food_stats.total_entries, 0);
    }

    #[test]
    fn times_logged_counts_every_spelling() {
        let diary = service();
        diary.log_food(FoodEntry::new("Oat Milk", t0())).unwrap();
        diary.log_food(FoodEntry::new("oat milk", t0() + Duration::hours(3))).unwrap();
        diary.log_food(FoodEntry::new("Milk", t0() + Duration::hours(4))).unwrap();
        assert_eq!(diary.times_logged("OAT MILK").unwrap(), 2);
        assert_eq!(diary.times_logged("Almond milk").unwrap(), 0);
    }

    #[test]
    fn clear_logs_keeps_flags() {
        let diary = service();
        diary.log_food(FoodEntry::new("Milk", t0())).unwrap();
        diary.log_symptom(SymptomEntry::new("Gas", t0())).unwrap();
        diary
            .flag_food_at("Milk", FlagReason::Intolerance, FlagSeverity::Low, t0())
            .unwrap();
        diary.clear_logs().unwrap();
        let snapshot = diary.snapshot().unwrap();
        assert!(snapshot.food_entries.is_empty());
        assert!(snapshot.symptom_entries.is_empty());
        assert_eq!(snapshot.flagged_foods.len(), 1);
    }

    #[test]
    fn concurrent_writers_do_not_lose_entries() {
        let diary = Arc::new(service());
        let handles: Vec<_> = (0..4i64)
            .map(|worker| {
                let diary = Arc::clone(&diary);
                std::thread::spawn(move || {
                    for i in 0..25i64 {
                        let ts = t0() + Duration::minutes(worker * 100 + i);
                        diary.log_food(FoodEntry::new(format!("food-{worker}-{i}"), ts)).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(diary.food_entries().unwrap().len(), 100);
    }

    #[test]
    fn profile_round_trip() {
        let diary = service();
        assert!(diary.profile().unwrap().is_none());
        let profile = UserProfile {
            username: "alex".into(),
            notifications_enabled: true,
            ..Default::default()
        };
        diary.save_profile(&profile).unwrap();
        assert_eq!(diary.profile().unwrap(), Some(profile));
    }

    #[test]
    fn on_disk_diary_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diary.db");
        {
            let diary = DiaryService::open(&path).unwrap();
            diary.log_food(FoodEntry::new("Oats", t0())).unwrap();
        }
        let diary = DiaryService::open(&path).unwrap();
        assert_eq!(diary.food_entries().unwrap()[0].food_name, "Oats");
    }
}
