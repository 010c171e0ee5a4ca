//! File-system boundary for archive bytes.
//!
//! Whole-file reads and writes; handles are closed on every exit path.
//! These are bounded single-shot operations over files of at most a few
//! megabytes, so no streaming or cancellation is involved.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::filename::{ExportFormat, export_file_name};

/// Reads an import source in full.
pub fn read_import_file(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path)?;
    info!(path = %path.display(), bytes = bytes.len(), "read import source");
    Ok(bytes)
}

/// Writes export bytes into `dir` under a generated archive file name and
/// returns the full path.
pub fn write_export_file(dir: &Path, format: ExportFormat, bytes: &[u8]) -> Result<PathBuf> {
    let path = dir.join(export_file_name(format));
    fs::write(&path, bytes)?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote export file");
    Ok(path)
}
