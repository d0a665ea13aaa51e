use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietaryPreferences {
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    pub dairy_free: bool,
    pub nut_free: bool,
    pub shellfish_free: bool,
}

/// Single-row auxiliary record describing the diary owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub username: String,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub dietary_preferences: DietaryPreferences,
    pub health_conditions: Vec<String>,
    pub medications: Vec<String>,
    pub notifications_enabled: bool,
}
