use serde::{Deserialize, Serialize};

use crate::allergens::{detect_allergens_in_ingredients, merge_allergens};

use super::food::NutritionFacts;

/// Normalized product shape produced by the nutrition lookup adapters
/// (USDA FoodData Central, OpenFoodFacts).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    pub name: String,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(flatten)]
    pub nutrition: NutritionFacts,
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub allergens_tags: Vec<String>,
}

impl ProductInfo {
    /// Display names of every allergen declared by the provider or found
    /// in the ingredient text, de-duplicated in first-seen order.
    pub fn allergen_names(&self) -> Vec<String> {
        let detected = self
            .ingredients
            .as_deref()
            .map(detect_allergens_in_ingredients)
            .unwrap_or_default();
        merge_allergens(&self.allergens_tags, &detected)
    }
}
