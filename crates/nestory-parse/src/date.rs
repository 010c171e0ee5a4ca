//! Calendar date parsing over a fixed, ordered set of formats.

use chrono::NaiveDate;

/// Formats tried in order; the first successful parse wins.
///
/// The US slash format deliberately precedes the EU dash check, so
/// slash-delimited input like `03/04/2024` always reads as March 4th.
/// This trial order is a fixed heuristic, not locale detection.
pub const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%d-%m-%Y", "%b %d, %Y"];

/// Parses a calendar date from free text. Returns `None` when no format
/// in [`DATE_FORMATS`] matches.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}
