use serde::{Deserialize, Deserializer, Serialize};

use crate::db::DatabaseError;

use super::tables::{HIGH_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            Self::High
        } else if score >= MEDIUM_RISK_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::str::FromStr for RiskTier {
    type Err = DatabaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            _ => Err(DatabaseError::InvalidEnum {
                field: "RiskTier".into(),
                value: s.into(),
            }),
        }
    }
}

/// One case presented for evaluation, as collected by the evaluation form.
/// Values are free text; anything outside the known vocabularies is
/// accepted and simply carries no weight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RiskCase {
    pub symptoms: Vec<String>,
    pub gender: Option<String>,
    pub family_history: Option<String>,
    pub previous_reaction: Option<String>,
    pub food_type: Option<String>,
    pub medical_conditions: Vec<String>,
    #[serde(deserialize_with = "lenient_severity_score")]
    pub severity_score: i32,
}

/// Accepts a number, a numeric string, or nothing. Anything else is 0.
fn lenient_severity_score<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let number = match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number
        .filter(|n| n.is_finite())
        .map(|n| n.trunc().clamp(i32::MIN as f64, i32::MAX as f64) as i32)
        .unwrap_or(0))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub allergic: bool,
    pub risk: RiskTier,
    pub score: u32,
    /// `min(score / 20, 1)` rounded to two decimals.
    pub confidence: f64,
    pub reasons: Vec<String>,
}
