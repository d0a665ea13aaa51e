use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::risk::{RiskAssessment, RiskTier};

/// Persisted outcome of one risk evaluation. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationHistoryRecord {
    pub id: String,
    pub symptom: String,
    pub food_name: String,
    #[serde(default)]
    pub meal_type: Option<String>,
    pub risk: RiskTier,
    pub confidence: f64,
    pub evaluated_at: DateTime<Utc>,
}

impl EvaluationHistoryRecord {
    pub fn new(
        id: impl Into<String>,
        symptom: impl Into<String>,
        food_name: impl Into<String>,
        meal_type: Option<String>,
        assessment: &RiskAssessment,
        evaluated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            symptom: symptom.into(),
            food_name: food_name.into(),
            meal_type,
            risk: assessment.risk,
            confidence: assessment.confidence,
            evaluated_at,
        }
    }
}
