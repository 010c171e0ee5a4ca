//! Export file naming.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Fixed prefix for every export file.
pub const EXPORT_FILE_PREFIX: &str = "nestory-backup-";

/// Per-process export counter; keeps repeated exports within the same
/// second lexically ordered and collision-free.
static EXPORT_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Builds an export file name: prefix, sortable UTC timestamp, sequence
/// number, extension. Names sort lexically in creation order.
#[must_use]
pub fn export_file_name(format: ExportFormat) -> String {
    let stamp = Utc::now().format("%Y%m%d-%H%M%S");
    let sequence = EXPORT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!(
        "{EXPORT_FILE_PREFIX}{stamp}-{sequence:04}.{}",
        format.extension()
    )
}
