//! Single-header matching against the target field table.

use nestory_model::TargetField;
use rapidfuzz::distance::jaro_winkler;

/// Minimum normalized similarity for a fuzzy match to be accepted.
pub const FUZZY_THRESHOLD: f64 = 0.70;
/// Upper bound on fuzzy-match confidence. Only the exact tiers reach 1.0,
/// so accepted fuzzy confidences always land strictly inside (0.5, 1.0).
pub const FUZZY_CONFIDENCE_CAP: f32 = 0.95;

/// Outcome of matching one raw header string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderMatch {
    pub field: Option<TargetField>,
    /// Meaningless when `field` is `None`; callers treat it as 0.
    pub confidence: f32,
}

impl HeaderMatch {
    pub const NONE: HeaderMatch = HeaderMatch {
        field: None,
        confidence: 0.0,
    };

    fn exact(field: TargetField) -> Self {
        Self {
            field: Some(field),
            confidence: 1.0,
        }
    }
}

/// Matches a raw header against the target field table.
///
/// Tiers, first match wins:
/// 1. case-insensitive exact match on a field's canonical name
/// 2. case-insensitive exact match on any alias
/// 3. Jaro-Winkler similarity on punctuation-normalized text against the
///    name and every alias, accepted above [`FUZZY_THRESHOLD`]
///
/// A header that fuzzy-matches two fields resolves to the higher
/// similarity; exact ties go to the first field in declaration order.
#[must_use]
pub fn match_header(header: &str) -> HeaderMatch {
    let trimmed = header.trim();
    if trimmed.is_empty() {
        return HeaderMatch::NONE;
    }
    for field in TargetField::ALL {
        if field.display_name().eq_ignore_ascii_case(trimmed) {
            return HeaderMatch::exact(field);
        }
    }
    for field in TargetField::ALL {
        if field
            .aliases()
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(trimmed))
        {
            return HeaderMatch::exact(field);
        }
    }

    let normalized = normalize_header(trimmed);
    let mut best_field = None;
    let mut best_score = 0.0_f64;
    for field in TargetField::ALL {
        let score = field_similarity(&normalized, field);
        if score > best_score {
            best_score = score;
            best_field = Some(field);
        }
    }
    match best_field {
        Some(field) if best_score >= FUZZY_THRESHOLD => HeaderMatch {
            field: Some(field),
            confidence: (best_score as f32).min(FUZZY_CONFIDENCE_CAP),
        },
        _ => HeaderMatch::NONE,
    }
}

/// Best similarity between a normalized header and any of the field's
/// recognized spellings.
fn field_similarity(normalized_header: &str, field: TargetField) -> f64 {
    let mut best = similarity(normalized_header, &normalize_header(field.display_name()));
    for alias in field.aliases() {
        let score = similarity(normalized_header, &normalize_header(alias));
        if score > best {
            best = score;
        }
    }
    best
}

fn similarity(a: &str, b: &str) -> f64 {
    jaro_winkler::similarity(a.chars(), b.chars())
}

/// Lowercases and collapses punctuation, underscores, and repeated
/// whitespace to single spaces.
pub(crate) fn normalize_header(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-', '.', '/', '\\', '(', ')', '#'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
