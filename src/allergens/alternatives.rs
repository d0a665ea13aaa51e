use serde::{Deserialize, Serialize};

use crate::config::MAX_ALTERNATIVES;
use crate::models::enums::{FlagReason, FlagSeverity, RecommendationPriority};
use crate::models::{normalize_food_name, FlaggedFood, FoodEntry};

/// Substitutes that avoid the offending ingredient. Checked first.
pub const FOOD_ALTERNATIVES: &[(&str, &[&str])] = &[
    // Dairy
    ("milk", &["almond milk", "oat milk", "coconut milk", "soy milk", "rice milk", "cashew milk"]),
    ("cheese", &["dairy-free cheese", "nutritional yeast", "cashew cheese"]),
    ("yogurt", &["dairy-free yogurt", "greek yogurt alternatives"]),
    ("butter", &["coconut oil", "olive oil", "ghee"]),
    ("cream", &["coconut cream", "cashew cream", "oat cream"]),
    // Gluten
    ("wheat", &["rice", "corn", "oats", "quinoa", "buckwheat", "almond flour"]),
    ("bread", &["gluten-free bread", "rice cakes", "cauliflower bread"]),
    ("pasta", &["gluten-free pasta", "rice noodles", "zucchini noodles", "quinoa pasta"]),
    ("flour", &["almond flour", "rice flour", "coconut flour"]),
    // Soy
    ("soy", &["tempeh", "tofu", "chickpeas", "lentils"]),
    ("tofu", &["tempeh", "seitan", "chickpeas"]),
    ("soy sauce", &["tamari", "coconut aminos"]),
    // Nuts
    ("peanuts", &["sunflower seeds", "tahini", "soy nuts"]),
    ("almonds", &["sunflower seeds", "pumpkin seeds"]),
    ("cashews", &["macadamia nuts", "pine nuts"]),
    // Eggs
    ("eggs", &["flax eggs", "chia eggs", "applesauce", "mashed banana", "aquafaba"]),
    // High histamine
    ("aged cheese", &["fresh mozzarella", "fresh ricotta", "cream cheese"]),
    ("cured meat", &["fresh chicken", "fresh turkey", "fresh fish"]),
    ("wine", &["fresh juice", "herbal tea"]),
    ("fermented", &["fresh vegetables", "fresh fruits"]),
    // Nightshades
    ("tomato", &["carrot", "beet", "bell pepper alternative"]),
    ("potato", &["sweet potato", "cauliflower", "turnip"]),
    ("pepper", &["ginger", "turmeric", "cardamom"]),
    // Shellfish
    ("shrimp", &["fish", "chicken", "tofu"]),
    ("crab", &["salmon", "chicken breast"]),
    // Fish
    ("salmon", &["sardines", "mackerel", "trout"]),
    ("tuna", &["sardines", "mackerel", "herring"]),
];

/// Foods with a comparable nutritional role. Fallback when no substitute
/// is listed.
pub const NUTRITIONAL_EQUIVALENTS: &[(&str, &[&str])] = &[
    // Protein
    ("chicken", &["turkey", "beef", "pork", "fish", "tofu", "lentils", "beans"]),
    ("beef", &["chicken", "turkey", "lamb", "bison", "venison"]),
    ("fish", &["shrimp", "salmon", "tuna", "chicken", "tofu"]),
    ("eggs", &["greek yogurt", "cottage cheese", "lentils", "beans"]),
    ("beans", &["lentils", "chickpeas", "tofu", "tempeh", "nuts"]),
    // Carbs
    ("rice", &["quinoa", "pasta", "oats", "sweet potato", "couscous"]),
    ("pasta", &["rice", "quinoa", "bread", "oats"]),
    ("sweet potato", &["regular potato", "yam", "butternut squash", "carrots"]),
    // Fats
    ("olive oil", &["coconut oil", "avocado oil", "sesame oil"]),
    ("butter", &["ghee", "coconut oil", "olive oil"]),
];

pub const DIETARY_TIPS: &[(&str, &str)] = &[
    ("dairy", "Try plant-based milk alternatives fortified with calcium and vitamin D for comparable nutrition."),
    ("gluten", "Look for certified gluten-free products. Many naturally gluten-free foods include rice, corn, quinoa, and potatoes."),
    ("soy", "Legumes like lentils, chickpeas, and beans provide similar protein and nutrients to soy products."),
    ("nuts", "Seeds like sunflower and pumpkin seeds, plus tahini, offer similar protein and healthy fats."),
    ("eggs", "Use flax or chia eggs as binders in baking, or add extra moisture with applesauce or mashed banana."),
    ("shellfish", "Fish and other lean meats provide similar protein. Try salmon for omega-3s as an alternative."),
    ("fish", "Look for other omega-3 sources like flaxseeds, walnuts, chia seeds, and algae supplements."),
    ("histamine", "Choose freshly caught or freshly prepared foods. Avoid aged, fermented, and processed foods."),
    ("nightshade", "Replace with other colorful vegetables like carrots, beets, and squash for nutrients and color."),
];

pub const NUTRITIONIST_REFERRAL: &str =
    "Consider consulting a nutritionist for personalized dietary advice.";

pub const NUTRITION_COMPARISON_NOTE: &str = "These alternatives may have different nutritional profiles. Use the Food Info Lookup to compare nutrition details.";

/// Table key is a substring of the name or the name is a substring of the key.
fn overlaps(name: &str, key: &str) -> bool {
    name.contains(key) || key.contains(name)
}

fn lookup<'a, T>(table: &'a [(&'static str, T)], name: &str) -> Option<&'a T> {
    let name = normalize_food_name(name);
    if name.is_empty() {
        return None;
    }
    table
        .iter()
        .find(|(key, _)| overlaps(&name, key))
        .map(|(_, value)| value)
}

/// Alternatives for a flagged food: substitutes first, then nutritional
/// equivalents, otherwise empty.
pub fn alternatives_for(food_name: &str) -> Vec<&'static str> {
    lookup(FOOD_ALTERNATIVES, food_name)
        .or_else(|| lookup(NUTRITIONAL_EQUIVALENTS, food_name))
        .map(|foods| foods.to_vec())
        .unwrap_or_default()
}

/// Dietary tip for an allergen or food name, falling back to a referral.
pub fn dietary_tip(allergen: &str) -> &'static str {
    lookup(DIETARY_TIPS, allergen)
        .copied()
        .unwrap_or(NUTRITIONIST_REFERRAL)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietRecommendation {
    pub flagged_food: String,
    pub reason: FlagReason,
    pub severity: FlagSeverity,
    pub times_logged: usize,
    pub alternatives: Vec<String>,
    pub priority: RecommendationPriority,
}

/// One recommendation per flagged food that has alternatives, most-eaten
/// first. Ties keep flag order.
pub fn generate_recommendations(
    flagged_foods: &[FlaggedFood],
    food_entries: &[FoodEntry],
) -> Vec<DietRecommendation> {
    let mut recommendations: Vec<DietRecommendation> = flagged_foods
        .iter()
        .filter_map(|flag| {
            let alternatives = alternatives_for(&flag.food_name);
            if alternatives.is_empty() {
                return None;
            }
            let times_logged = food_entries
                .iter()
                .filter(|entry| flag.matches(&entry.food_name))
                .count();
            Some(DietRecommendation {
                flagged_food: flag.food_name.clone(),
                reason: flag.reason,
                severity: flag.severity,
                times_logged,
                alternatives: alternatives
                    .into_iter()
                    .take(MAX_ALTERNATIVES)
                    .map(String::from)
                    .collect(),
                priority: if times_logged > 0 {
                    RecommendationPriority::High
                } else {
                    RecommendationPriority::Medium
                },
            })
        })
        .collect();

    recommendations.sort_by(|a, b| b.times_logged.cmp(&a.times_logged));
    recommendations
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionComparison {
    pub original: String,
    pub alternatives: Vec<String>,
    pub tip: String,
    pub note: String,
}

pub fn compare_nutrition(original: &str, alternatives: &[String]) -> NutritionComparison {
    NutritionComparison {
        original: original.to_string(),
        alternatives: alternatives.to_vec(),
        tip: dietary_tip(original).to_string(),
        note: NUTRITION_COMPARISON_NOTE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn substitutes_match_when_key_inside_name() {
        assert_eq!(
            alternatives_for("Whole Milk"),
            vec!["almond milk", "oat milk", "coconut milk", "soy milk", "rice milk", "cashew milk"]
        );
    }

    #[test]
    fn substitutes_match_when_name_inside_key() {
        assert_eq!(alternatives_for("shrim"), vec!["fish", "chicken", "tofu"]);
    }

    #[test]
    fn equivalents_used_when_no_substitute() {
        assert_eq!(
            alternatives_for("Grilled Chicken"),
            vec!["turkey", "beef", "pork", "fish", "tofu", "lentils", "beans"]
        );
    }

    #[test]
    fn unknown_food_has_no_alternatives() {
        assert!(alternatives_for("dragonfruit").is_empty());
        assert!(alternatives_for("   ").is_empty());
    }

    #[test]
    fn tip_falls_back_to_referral() {
        assert_eq!(dietary_tip("kiwi"), NUTRITIONIST_REFERRAL);
        assert!(dietary_tip("Gluten").starts_with("Look for certified gluten-free"));
    }

    #[test]
    fn recommendations_sorted_by_times_logged() {
        let now = Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap();
        let flags = vec![
            FlaggedFood::new("Bread", FlagReason::Intolerance, FlagSeverity::Low, now),
            FlaggedFood::new("Peanuts", FlagReason::Allergen, FlagSeverity::High, now),
            FlaggedFood::new("Dragonfruit", FlagReason::Dislike, FlagSeverity::Low, now),
        ];
        let foods = vec![
            FoodEntry::new("peanuts", now),
            FoodEntry::new("PEANUTS", now),
            FoodEntry::new("Toast", now),
        ];

        let recs = generate_recommendations(&flags, &foods);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].flagged_food, "Peanuts");
        assert_eq!(recs[0].times_logged, 2);
        assert_eq!(recs[0].priority, RecommendationPriority::High);
        assert_eq!(recs[1].flagged_food, "Bread");
        assert_eq!(recs[1].priority, RecommendationPriority::Medium);
    }

    #[test]
    fn recommendations_cap_alternatives() {
        let now = Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap();
        let flags = vec![FlaggedFood::new("Milk", FlagReason::Intolerance, FlagSeverity::Medium, now)];
        let recs = generate_recommendations(&flags, &[]);
        assert_eq!(recs[0].alternatives.len(), MAX_ALTERNATIVES);
    }

    #[test]
    fn comparison_includes_tip_and_note() {
        let cmp = compare_nutrition("eggs", &["flax eggs".to_string()]);
        assert!(cmp.tip.starts_with("Use flax or chia eggs"));
        assert_eq!(cmp.note, NUTRITION_COMPARISON_NOTE);
    }
}
