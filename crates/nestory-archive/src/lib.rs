//! Archive serialization and deserialization.
//!
//! Two directions, two formats: canonical records export to a versioned
//! JSON envelope or a flat CSV item table, and both come back in through
//! validating importers that accumulate per-record errors instead of
//! aborting on the first bad row.

pub mod csv_import;
pub mod error;
pub mod export;
pub mod filename;
pub mod import;
pub mod io;

pub use csv_import::{csv_headers, import_csv};
pub use error::{ArchiveError, Result};
pub use export::{archive_to_json, items_to_csv};
pub use filename::{EXPORT_FILE_PREFIX, ExportFormat, export_file_name};
pub use import::{ImportOutcome, import_json, read_archive};
pub use io::{read_import_file, write_export_file};
