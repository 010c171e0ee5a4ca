//! The versioned archive envelope bundling all exportable collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{CategoryRecord, ItemRecord, ReceiptRecord, RoomRecord};

/// A complete inventory export.
///
/// `export_date` and `app_version` are required envelope fields; the four
/// record collections default to empty, so an archive with zero records in
/// every collection still decodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Archive {
    pub export_date: DateTime<Utc>,
    pub app_version: String,
    #[serde(default)]
    pub items: Vec<ItemRecord>,
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
    #[serde(default)]
    pub rooms: Vec<RoomRecord>,
    #[serde(default)]
    pub receipts: Vec<ReceiptRecord>,
}

impl Archive {
    /// Assembles an envelope around the given collections, stamped with
    /// the current time and this crate's version as producer.
    pub fn new(
        items: Vec<ItemRecord>,
        categories: Vec<CategoryRecord>,
        rooms: Vec<RoomRecord>,
        receipts: Vec<ReceiptRecord>,
    ) -> Self {
        Self {
            export_date: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            items,
            categories,
            rooms,
            receipts,
        }
    }

    /// Total records across all collections.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.items.len() + self.categories.len() + self.rooms.len() + self.receipts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_archive_is_valid() {
        let archive = Archive::new(Vec::new(), Vec::new(), Vec::new(), Vec::new());
        assert!(archive.is_empty());
        let json = serde_json::to_string(&archive).unwrap();
        let back: Archive = serde_json::from_str(&json).unwrap();
        assert!(back.is_empty());
        assert_eq!(back.app_version, archive.app_version);
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let json = r#"{"exportDate":"2024-06-01T12:00:00Z","appVersion":"1.2.0"}"#;
        let archive: Archive = serde_json::from_str(json).unwrap();
        assert!(archive.is_empty());
        assert_eq!(archive.app_version, "1.2.0");
    }

    #[test]
    fn missing_envelope_field_fails_to_decode() {
        let json = r#"{"items":[]}"#;
        assert!(serde_json::from_str::<Archive>(json).is_err());
    }
}
