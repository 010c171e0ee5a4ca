//! JSON archive import with per-record validation.

use nestory_model::{
    Archive, CategoryRecord, ImportError, ImportReport, ItemRecord, ReceiptRecord, RoomRecord,
};
use tracing::{debug, warn};

use crate::error::Result;

/// Records that survived validation, plus the report describing what was
/// imported and what was rejected.
///
/// Materializing the surviving records into persistent storage (and the
/// merge-versus-replace choice that goes with it) is the caller's job.
#[derive(Debug, Clone, Default)]
pub struct ImportOutcome {
    pub items: Vec<ItemRecord>,
    pub categories: Vec<CategoryRecord>,
    pub rooms: Vec<RoomRecord>,
    pub receipts: Vec<ReceiptRecord>,
    pub report: ImportReport,
}

/// Decodes an archive envelope.
///
/// Malformed JSON or missing required envelope fields fail the whole
/// call; an envelope whose collections are all empty is valid.
pub fn read_archive(bytes: &[u8]) -> Result<Archive> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Imports an archive from JSON bytes.
///
/// The envelope decode is all-or-nothing; once it succeeds, each record
/// is validated individually and failures are accumulated. Counts in the
/// report reflect only records that passed.
pub fn import_json(bytes: &[u8]) -> Result<ImportOutcome> {
    let archive = read_archive(bytes)?;
    debug!(
        records = archive.record_count(),
        version = %archive.app_version,
        "decoded archive envelope"
    );
    Ok(validate_archive(archive))
}

fn validate_archive(archive: Archive) -> ImportOutcome {
    let mut outcome = ImportOutcome::default();

    for (index, item) in archive.items.into_iter().enumerate() {
        if item.name_is_blank() {
            warn!(position = index + 1, "rejected item with empty name");
            outcome
                .report
                .errors
                .push(ImportError::record(format!(
                    "item {} has an empty name",
                    index + 1
                )));
            continue;
        }
        outcome.items.push(item);
    }

    for (index, category) in archive.categories.into_iter().enumerate() {
        if category.name.trim().is_empty() {
            outcome
                .report
                .errors
                .push(ImportError::record(format!(
                    "category {} has an empty name",
                    index + 1
                )));
            continue;
        }
        outcome.categories.push(category);
    }

    for (index, room) in archive.rooms.into_iter().enumerate() {
        if room.name.trim().is_empty() {
            outcome
                .report
                .errors
                .push(ImportError::record(format!(
                    "room {} has an empty name",
                    index + 1
                )));
            continue;
        }
        outcome.rooms.push(room);
    }

    outcome.receipts = archive.receipts;

    outcome.report.items_imported = outcome.items.len();
    outcome.report.categories_imported = outcome.categories.len();
    outcome.report.rooms_imported = outcome.rooms.len();
    outcome.report.receipts_imported = outcome.receipts.len();
    outcome
}
