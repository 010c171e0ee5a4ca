//! Header matching and column mapping.
//!
//! Maps raw spreadsheet column headers to canonical target fields with
//! confidence scores, and tracks the per-column mapping state for an
//! entire header row through caller-driven reassignment.

pub mod engine;
pub mod error;
pub mod matcher;

pub use engine::{ColumnMapping, MappingResult, analyze_headers, update_mapping};
pub use error::MappingError;
pub use matcher::{FUZZY_CONFIDENCE_CAP, FUZZY_THRESHOLD, HeaderMatch, match_header};
