//! Condition normalization via keyword containment.

use nestory_model::ItemCondition;

/// Keyword table checked in order; the first keyword contained in the
/// input wins. More specific phrases come before the bare words they
/// contain ("like new" before "new"), and damage terms come before wear
/// terms so "broken" never falls through to a milder bucket.
const CONDITION_KEYWORDS: [(&str, ItemCondition); 21] = [
    ("like new", ItemCondition::LikeNew),
    ("like-new", ItemCondition::LikeNew),
    ("likenew", ItemCondition::LikeNew),
    ("open box", ItemCondition::LikeNew),
    ("brand new", ItemCondition::New),
    ("new", ItemCondition::New),
    ("excellent", ItemCondition::New),
    ("mint", ItemCondition::New),
    ("sealed", ItemCondition::New),
    ("poor", ItemCondition::Poor),
    ("damaged", ItemCondition::Poor),
    ("broken", ItemCondition::Poor),
    ("cracked", ItemCondition::Poor),
    ("defect", ItemCondition::Poor),
    ("fair", ItemCondition::Fair),
    ("worn", ItemCondition::Fair),
    ("used", ItemCondition::Fair),
    ("scratched", ItemCondition::Fair),
    ("good", ItemCondition::Good),
    ("decent", ItemCondition::Good),
    ("working", ItemCondition::Good),
];

/// Maps free text to the fixed condition vocabulary.
///
/// Unrecognized text degrades to [`ItemCondition::DEFAULT`] instead of
/// failing, so unknown condition wording never blocks an otherwise-valid
/// row.
#[must_use]
pub fn normalize_condition(raw: &str) -> ItemCondition {
    let text = raw.trim().to_lowercase();
    if text.is_empty() {
        return ItemCondition::DEFAULT;
    }
    CONDITION_KEYWORDS
        .into_iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|(_, condition)| condition)
        .unwrap_or(ItemCondition::DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_keywords() {
        assert_eq!(normalize_condition("New"), ItemCondition::New);
        assert_eq!(normalize_condition("BRAND NEW"), ItemCondition::New);
        assert_eq!(normalize_condition("excellent"), ItemCondition::New);
        assert_eq!(normalize_condition("Like New"), ItemCondition::LikeNew);
        assert_eq!(normalize_condition("good"), ItemCondition::Good);
        assert_eq!(normalize_condition("fair - some wear"), ItemCondition::Fair);
        assert_eq!(normalize_condition("damaged"), ItemCondition::Poor);
        assert_eq!(normalize_condition("screen broken"), ItemCondition::Poor);
    }

    #[test]
    fn specific_phrases_beat_contained_words() {
        // "like new" contains "new"; the longer phrase must win.
        assert_eq!(normalize_condition("like new"), ItemCondition::LikeNew);
    }

    #[test]
    fn unknown_text_defaults() {
        assert_eq!(normalize_condition(""), ItemCondition::DEFAULT);
        assert_eq!(normalize_condition("???"), ItemCondition::DEFAULT);
        assert_eq!(normalize_condition("vintage"), ItemCondition::DEFAULT);
    }
}
