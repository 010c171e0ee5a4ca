//! Import result reporting: per-kind success counts plus an itemized,
//! ordered error list.
//!
//! Validation failures are data, not exceptions. A caller renders
//! "imported 8 of 10 items, 2 errors" from one report value instead of an
//! all-or-nothing outcome.

use serde::{Deserialize, Serialize};

/// Classification of an import error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportErrorKind {
    /// Source file missing or unreadable. Fatal for the whole call.
    Source,
    /// Archive envelope malformed or missing required fields. Fatal.
    Envelope,
    /// A single record failed validation. Accumulated, never fatal.
    Record,
    /// Column mapping does not cover mandatory fields. Reported before
    /// any row parsing begins.
    Mapping,
}

/// One itemized import error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportError {
    pub kind: ImportErrorKind,
    pub message: String,
}

impl ImportError {
    /// A per-record validation error.
    pub fn record(message: impl Into<String>) -> Self {
        Self {
            kind: ImportErrorKind::Record,
            message: message.into(),
        }
    }
}

/// Counts of successfully materialized records plus accumulated errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    pub items_imported: usize,
    pub categories_imported: usize,
    pub rooms_imported: usize,
    pub receipts_imported: usize,
    pub errors: Vec<ImportError>,
}

impl ImportReport {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    pub fn total_imported(&self) -> usize {
        self.items_imported + self.categories_imported + self.rooms_imported
            + self.receipts_imported
    }

    /// One-line, pluralization-aware summary.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut parts = vec![count_noun(self.items_imported, "item", "items")];
        if self.categories_imported > 0 {
            parts.push(count_noun(
                self.categories_imported,
                "category",
                "categories",
            ));
        }
        if self.rooms_imported > 0 {
            parts.push(count_noun(self.rooms_imported, "room", "rooms"));
        }
        if self.receipts_imported > 0 {
            parts.push(count_noun(self.receipts_imported, "receipt", "receipts"));
        }
        let imported = parts.join(", ");
        if self.errors.is_empty() {
            format!("Imported {imported}")
        } else {
            format!(
                "Imported {imported} ({})",
                count_noun(self.errors.len(), "error", "errors")
            )
        }
    }
}

fn count_noun(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_pluralizes() {
        let report = ImportReport {
            items_imported: 1,
            categories_imported: 2,
            ..ImportReport::default()
        };
        assert_eq!(report.summary(), "Imported 1 item, 2 categories");
        assert!(!report.has_errors());
    }

    #[test]
    fn summary_includes_error_count() {
        let report = ImportReport {
            items_imported: 8,
            errors: vec![
                ImportError::record("item 3 has an empty name"),
                ImportError::record("item 7 has an empty name"),
            ],
            ..ImportReport::default()
        };
        assert_eq!(report.summary(), "Imported 8 items (2 errors)");
        assert!(report.has_errors());
    }

    #[test]
    fn zero_items_still_reported() {
        let report = ImportReport {
            errors: vec![ImportError::record("row 1: missing item name")],
            ..ImportReport::default()
        };
        assert_eq!(report.summary(), "Imported 0 items (1 error)");
    }
}
