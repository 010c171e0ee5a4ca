//! Error types for archive operations.
//!
//! Only fatal failures live here: unreadable sources, structurally
//! invalid envelopes, and mappings rejected before row parsing.
//! Per-record validation failures are report data, never errors.

use nestory_map::MappingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Source file missing or unreadable.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed JSON or missing required envelope fields.
    #[error("invalid archive: {0}")]
    Json(#[from] serde_json::Error),
    /// Spreadsheet bytes could not be parsed as CSV.
    #[error("invalid csv: {0}")]
    Csv(#[from] csv::Error),
    /// Column mapping rejected before any row parsing began.
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
