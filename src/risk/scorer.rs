use super::tables::{
    HighRiskFood, MedicalCondition, PreviousReaction, ReactionSymptom,
    CONFIDENCE_SATURATION_SCORE, FAMILY_HISTORY_BONUS, HIGH_SEVERITY_THRESHOLD,
    MAX_SEVERITY_SCORE,
};
use super::types::{RiskAssessment, RiskCase, RiskTier};

/// Accumulates score and reasons in evaluation order.
#[derive(Default)]
struct Tally {
    score: u32,
    reasons: Vec<String>,
}

impl Tally {
    fn add(&mut self, weight: u32, reason: Option<String>) {
        self.score += weight;
        if let Some(reason) = reason {
            self.reasons.push(reason);
        }
    }
}

fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Score a case against the fixed weight tables.
///
/// Reasons are emitted in step order: symptoms, previous reaction, family
/// history, food type, medical conditions, severity. Repeated symptoms or
/// conditions count once.
pub fn evaluate_risk(case: &RiskCase) -> RiskAssessment {
    let mut tally = Tally::default();

    let mut seen_symptoms = Vec::new();
    for symptom in case.symptoms.iter().filter_map(|s| ReactionSymptom::from_label(s)) {
        if seen_symptoms.contains(&symptom) {
            continue;
        }
        seen_symptoms.push(symptom);
        tally.add(
            symptom.weight(),
            Some(format!("Symptom reported: {}", symptom.label())),
        );
    }

    if let Some(reaction) = case
        .previous_reaction
        .as_deref()
        .and_then(PreviousReaction::from_label)
        .filter(|r| *r != PreviousReaction::NoReaction)
    {
        tally.add(
            reaction.weight(),
            Some(format!("Previous reaction: {}", reaction.label())),
        );
    }

    let family_history = case
        .family_history
        .as_deref()
        .is_some_and(|v| v.trim().eq_ignore_ascii_case("yes"));
    if family_history {
        tally.add(
            FAMILY_HISTORY_BONUS,
            Some("Family history of allergies".to_string()),
        );
    }

    if let Some(food) = case.food_type.as_deref().and_then(HighRiskFood::from_label) {
        tally.add(
            food.weight(),
            Some(format!("High-risk food: {}", food.label())),
        );
    }

    let mut seen_conditions = Vec::new();
    for condition in case
        .medical_conditions
        .iter()
        .filter_map(|c| MedicalCondition::from_label(c))
    {
        if seen_conditions.contains(&condition) {
            continue;
        }
        seen_conditions.push(condition);
        tally.add(condition.weight(), Some(condition.reason().to_string()));
    }

    let severity = case.severity_score.clamp(0, MAX_SEVERITY_SCORE);
    let severity_reason = (severity >= HIGH_SEVERITY_THRESHOLD)
        .then(|| "High symptom severity".to_string());
    tally.add(severity as u32, severity_reason);

    let risk = RiskTier::from_score(tally.score);
    let confidence =
        round_two_decimals((tally.score as f64 / CONFIDENCE_SATURATION_SCORE).min(1.0));

    tracing::debug!(
        score = tally.score,
        risk = risk.as_str(),
        reasons = tally.reasons.len(),
        "Risk evaluated"
    );

    RiskAssessment {
        allergic: risk != RiskTier::Low,
        risk,
        score: tally.score,
        confidence,
        reasons: tally.reasons,
    }
}
