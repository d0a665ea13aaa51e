use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Provider allergen tag (without language prefix) → display name.
/// Covers the FDA major allergens, the EU annex list and the internal
/// OpenFoodFacts categories.
pub const ALLERGEN_NAMES: &[(&str, &str)] = &[
    // FDA
    ("milk", "Milk"),
    ("egg", "Eggs"),
    ("fish", "Fish"),
    ("shellfish", "Crustacean Shellfish"),
    ("wheat", "Wheat"),
    ("soybeans", "Soy"),
    ("soy", "Soy"),
    ("peanut", "Peanuts"),
    ("sesame", "Sesame"),
    ("tree_nuts", "Tree Nuts"),
    // EU
    ("celery", "Celery"),
    ("mustard", "Mustard"),
    ("lupin", "Lupin"),
    ("molluscs", "Mollusks"),
    ("sulphites", "Sulfites"),
    ("sulfites", "Sulfites"),
    ("gluten", "Gluten"),
    // OpenFoodFacts internal categories
    ("nuts", "Tree Nuts"),
    ("eggs", "Eggs"),
    ("milk_products", "Milk"),
    ("crustaceans", "Crustacean Shellfish"),
    ("mollusks", "Mollusks"),
];

/// Substrings that reveal an allergen inside an ingredients list.
/// Matching is plain `contains` on lowercase text, so "almond" also
/// matches "almondine".
pub const ALLERGEN_KEYWORDS: &[&str] = &[
    "milk", "casein", "whey", "cheese", "cream", "lactose",
    "egg", "albumin",
    "fish", "salmon", "tuna", "cod",
    "crab", "shrimp", "lobster", "shellfish",
    "peanut",
    "almond", "walnut", "pecan", "cashew", "hazelnut", "pistachio",
    "wheat", "barley", "rye", "malt", "gluten",
    "soy", "soybean", "tofu", "miso", "edamame", "soy lecithin",
    "sesame", "tahini",
    "mustard",
    "celery",
    "lupin",
    "sulfites", "sulphites",
    "molluscs", "mollusks",
];

/// Strips a provider language prefix such as `en:` or `fr:`.
static RE_TAG_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*:").expect("valid tag prefix pattern"));

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Normalize a raw provider tag (`en:milk`, `en:tree-nuts`, `Sesame`) to its
/// display name. Unknown tags are capitalized as-is; blank tags yield `None`.
pub fn normalize_allergen_tag(tag: &str) -> Option<String> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        return None;
    }
    let key = RE_TAG_PREFIX
        .replace(trimmed, "")
        .to_lowercase()
        .replace('-', "_");
    if key.is_empty() {
        return None;
    }
    let name = ALLERGEN_NAMES
        .iter()
        .find(|(tag, _)| *tag == key)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| capitalize(&key.replace('_', " ")));
    Some(name)
}

/// Scan free-text ingredients for allergen keywords, in keyword-table order.
pub fn detect_allergens_in_ingredients(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    ALLERGEN_KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(*keyword))
        .filter_map(|keyword| normalize_allergen_tag(keyword))
        .collect()
}

/// Union of normalized provider tags and already-normalized detections,
/// de-duplicated in first-seen order.
pub fn merge_allergens(provider_tags: &[String], detected: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    provider_tags
        .iter()
        .filter_map(|tag| normalize_allergen_tag(tag))
        .chain(detected.iter().cloned())
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_language_prefix() {
        assert_eq!(normalize_allergen_tag("en:milk").as_deref(), Some("Milk"));
        assert_eq!(normalize_allergen_tag("fr:gluten").as_deref(), Some("Gluten"));
        assert_eq!(normalize_allergen_tag("en:crustaceans").as_deref(), Some("Crustacean Shellfish"));
    }

    #[test]
    fn normalize_handles_hyphenated_tags() {
        assert_eq!(normalize_allergen_tag("en:tree-nuts").as_deref(), Some("Tree Nuts"));
        assert_eq!(normalize_allergen_tag("en:milk-products").as_deref(), Some("Milk"));
    }

    #[test]
    fn normalize_unknown_tag_capitalizes() {
        assert_eq!(normalize_allergen_tag("en:kiwi").as_deref(), Some("Kiwi"));
        assert_eq!(normalize_allergen_tag("SESAME").as_deref(), Some("Sesame"));
    }

    #[test]
    fn normalize_blank_tag_is_none() {
        assert_eq!(normalize_allergen_tag(""), None);
        assert_eq!(normalize_allergen_tag("   "), None);
        assert_eq!(normalize_allergen_tag("en:"), None);
    }

    #[test]
    fn detect_accepts_partial_words() {
        let found = detect_allergens_in_ingredients("Green beans almondine");
        assert_eq!(found, vec!["Almond"]);
    }

    #[test]
    fn detect_is_case_insensitive() {
        let found = detect_allergens_in_ingredients("WHEAT flour, Sesame seeds");
        assert_eq!(found, vec!["Wheat", "Sesame"]);
    }

    #[test]
    fn detect_empty_text_finds_nothing() {
        assert!(detect_allergens_in_ingredients("").is_empty());
    }

    #[test]
    fn merge_deduplicates_in_order() {
        let tags = vec!["en:milk".to_string(), "en:soybeans".to_string()];
        let detected = vec!["Soy".to_string(), "Wheat".to_string()];
        assert_eq!(merge_allergens(&tags, &detected), vec!["Milk", "Soy", "Wheat"]);
    }
}
