/// Allergen categories and representative food keywords. A food belongs to
/// a category when its lowercased name contains any keyword.
pub const COMMON_ALLERGENS: &[(&str, &[&str])] = &[
    ("dairy", &["milk", "cheese", "yogurt", "butter", "cream", "lactose"]),
    ("gluten", &["wheat", "bread", "pasta", "flour", "barley", "rye", "oats"]),
    (
        "nuts",
        &["peanut", "almond", "walnut", "cashew", "pecan", "brazil nut", "pistachio"],
    ),
    ("eggs", &["egg", "mayonnaise", "custard", "meringue"]),
    ("soy", &["soy", "soybean", "tofu", "tempeh", "soy sauce", "edamame"]),
    ("shellfish", &["shrimp", "crab", "lobster", "oyster", "clam", "scallop"]),
    ("fish", &["salmon", "tuna", "cod", "halibut", "sardine", "anchovy"]),
    ("citrus", &["orange", "lemon", "lime", "grapefruit", "citrus"]),
    ("nightshades", &["tomato", "potato", "eggplant", "pepper", "paprika"]),
    (
        "histamine",
        &["aged cheese", "wine", "beer", "fermented", "aged", "cured"],
    ),
];

/// Known symptom keywords and the allergen categories they point to.
pub const SYMPTOM_PATTERNS: &[(&str, &[&str])] = &[
    ("nausea", &["dairy", "gluten", "eggs"]),
    ("bloating", &["dairy", "gluten", "soy"]),
    ("stomach pain", &["dairy", "gluten", "citrus", "nightshades"]),
    ("diarrhea", &["dairy", "gluten", "soy"]),
    ("headache", &["histamine", "citrus", "nuts"]),
    ("skin rash", &["nuts", "shellfish", "eggs", "soy"]),
    ("hives", &["nuts", "shellfish", "eggs"]),
    ("fatigue", &["gluten", "dairy"]),
    ("joint pain", &["nightshades", "gluten"]),
    ("congestion", &["dairy", "histamine"]),
    ("throat irritation", &["nuts", "citrus"]),
    ("digestive issues", &["dairy", "gluten", "soy"]),
    ("gas", &["dairy", "gluten", "soy"]),
    ("cramping", &["dairy", "gluten"]),
    ("swelling", &["nuts", "shellfish", "eggs"]),
];

/// Food keywords for an allergen category.
pub fn allergen_foods(category: &str) -> &'static [&'static str] {
    COMMON_ALLERGENS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, foods)| *foods)
        .unwrap_or(&[])
}

/// Categories whose keyword list matches inside `food_name`.
pub fn categories_for_food(food_name: &str) -> Vec<&'static str> {
    let lower = food_name.to_lowercase();
    COMMON_ALLERGENS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(name, _)| *name)
        .collect()
}
