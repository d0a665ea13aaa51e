use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{FoodEntry, SymptomEntry};

/// Anything ordered on the diary timeline.
pub trait Timestamped {
    fn timestamp(&self) -> DateTime<Utc>;

    /// UTC calendar day of the timestamp.
    fn day(&self) -> NaiveDate {
        self.timestamp().date_naive()
    }
}

impl Timestamped for FoodEntry {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl Timestamped for SymptomEntry {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Inclusive instant range a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRange {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl ReportRange {
    pub fn new(start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Whole UTC days: from the first instant of `from` to the last
    /// instant of `to`.
    pub fn days(from: NaiveDate, to: NaiveDate) -> Self {
        let start = Utc.from_utc_datetime(&from.and_time(NaiveTime::MIN));
        let end = match to.succ_opt() {
            Some(next) => {
                Utc.from_utc_datetime(&next.and_time(NaiveTime::MIN)) - Duration::nanoseconds(1)
            }
            None => DateTime::<Utc>::MAX_UTC,
        };
        Self::new(start, end)
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start_date && instant <= self.end_date
    }

    /// Entries inside the range, in their original order.
    pub fn filter<'a, T: Timestamped>(&self, entries: &'a [T]) -> Vec<&'a T> {
        entries
            .iter()
            .filter(|entry| self.contains(entry.timestamp()))
            .collect()
    }
}

/// Which symptoms count as near a meal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorrelationWindow {
    /// `|symptom - meal| <= window`, symptoms before the meal included.
    #[default]
    Symmetric,
    /// `0 <= symptom - meal <= window`.
    AfterOnly,
}

impl CorrelationWindow {
    /// True when any of `meal_times` (sorted ascending) is within the window
    /// of `symptom_time`.
    pub fn matches_any(
        &self,
        sorted_meal_times: &[DateTime<Utc>],
        symptom_time: DateTime<Utc>,
        window: Duration,
    ) -> bool {
        // Meals at or before the symptom occupy [0, split).
        let split = sorted_meal_times.partition_point(|t| *t <= symptom_time);
        let latest_before = split
            .checked_sub(1)
            .map(|i| sorted_meal_times[i])
            .is_some_and(|meal| symptom_time - meal <= window);
        match self {
            Self::AfterOnly => latest_before,
            Self::Symmetric => {
                latest_before
                    || sorted_meal_times
                        .get(split)
                        .is_some_and(|meal| *meal - symptom_time <= window)
            }
        }
    }
}

/// True when `instant` lies in `[anchor - window, anchor]`.
pub fn within_lookback(instant: DateTime<Utc>, anchor: DateTime<Utc>, window: Duration) -> bool {
    instant >= anchor - window && instant <= anchor
}
