//! Currency amount parsing.

/// Leading symbols stripped before numeric parsing.
const CURRENCY_SYMBOLS: [char; 4] = ['$', '€', '£', '¥'];

/// Parses a currency amount from free text.
///
/// Strips one leading currency symbol and thousands separators, then
/// parses the remainder as a decimal. Returns `None` for empty input or a
/// non-numeric remainder ("N/A", "abc").
#[must_use]
pub fn parse_amount(raw: &str) -> Option<f64> {
    let text = raw
        .trim()
        .trim_start_matches(CURRENCY_SYMBOLS)
        .trim_start();
    if text.is_empty() {
        return None;
    }
    let cleaned: String = text.chars().filter(|ch| *ch != ',').collect();
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_symbol_and_thousands_separators() {
        assert_eq!(parse_amount("$1,234.56"), Some(1234.56));
        assert_eq!(parse_amount("€999"), Some(999.0));
        assert_eq!(parse_amount(" £12.50 "), Some(12.5));
        assert_eq!(parse_amount("1500"), Some(1500.0));
    }

    #[test]
    fn rejects_empty_and_non_numeric() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("N/A"), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("$"), None);
    }

    #[test]
    fn rejects_non_finite_text() {
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
    }
}
