use super::rules;

/// Canonical category key for a free-text food name.
///
/// Trims and lowercases, then resolves known synonyms. Names without a
/// synonym come back as-is; whether they exist in the rule table is the
/// caller's concern.
pub fn normalize_food(food_type: &str) -> String {
    let cleaned = food_type.trim().to_lowercase();
    match rules::synonym(&cleaned) {
        Some(key) => key.to_string(),
        None => cleaned,
    }
}
