use std::collections::HashMap;

use lazy_static::lazy_static;

/// Baseline for anything the table does not know about.
pub const DEFAULT_BASELINE_HOURS: u32 = 2;

/// Hours a freshly cooked dish stays safe at room temperature.
static EXPIRY_RULES: &[(&str, u32)] = &[
    // rice and grains
    ("rice", 6),
    ("fried rice", 4),
    ("pulao", 5),
    ("biryani", 5),
    // breads and breakfast
    ("bread", 2),
    ("roti", 3),
    ("chapati", 3),
    ("paratha", 4),
    ("poha", 3),
    ("upma", 3),
    // lentils and gravies
    ("dal", 6),
    ("curry", 5),
    ("chicken curry", 5),
    ("paneer curry", 5),
    ("rajma", 6),
    ("chole", 6),
    ("sambar", 5),
    ("kadhi", 5),
    // snacks and south indian
    ("samosa", 3),
    ("pakora", 3),
    ("vada", 3),
    ("idli", 4),
    ("dosa", 4),
    ("uttapam", 4),
    // sweets
    ("gulab jamun", 12),
    ("jalebi", 8),
    ("halwa", 12),
    ("laddu", 24),
    ("barfi", 24),
    // raw and dairy
    ("salad", 2),
    ("fruits", 12),
    ("vegetables", 12),
    ("curd", 24),
    ("milk", 6),
];

/// Alternate spellings and dish variants, keyed lowercase and trimmed.
static SYNONYMS: &[(&str, &str)] = &[
    ("chapathi", "chapati"),
    ("naan", "roti"),
    ("phulka", "roti"),
    ("stuffed paratha", "paratha"),
    ("jeera rice", "rice"),
    ("veg biryani", "biryani"),
    ("chicken biryani", "biryani"),
    ("lentils", "dal"),
    ("daal", "dal"),
    ("vegetable curry", "curry"),
    ("sabzi curry", "curry"),
    ("bhaji", "pakora"),
    ("vada pav", "vada"),
    ("idly", "idli"),
    ("jamun", "gulab jamun"),
    ("laddoo", "laddu"),
    ("boondi laddu", "laddu"),
    ("soan papdi", "barfi"),
    ("buttermilk", "curd"),
    ("lassi", "curd"),
];

lazy_static! {
    static ref RULE_TABLE: HashMap<&'static str, u32> = EXPIRY_RULES.iter().copied().collect();
    static ref SYNONYM_TABLE: HashMap<&'static str, &'static str> =
        SYNONYMS.iter().copied().collect();
}

/// Baseline shelf-life in hours for a category key.
pub fn baseline_hours(food_key: &str) -> u32 {
    RULE_TABLE
        .get(food_key)
        .copied()
        .unwrap_or(DEFAULT_BASELINE_HOURS)
}

pub(crate) fn is_known(food_key: &str) -> bool {
    RULE_TABLE.contains_key(food_key)
}

/// Canonical key for a synonym, if one is registered.
pub(crate) fn synonym(name: &str) -> Option<&'static str> {
    SYNONYM_TABLE.get(name).copied()
}
