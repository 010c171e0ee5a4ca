//! Column mapping over an entire header row.
//!
//! A [`MappingResult`] is an immutable value: reassignment returns a new,
//! fully recomputed result instead of patching in place. Header rows are
//! tens of columns, so recomputation is cheap and keeps the exclusivity
//! invariant (at most one column per target field) impossible to violate.

use nestory_model::TargetField;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matcher::match_header;

/// Confidence assigned to manual reassignment; a user's explicit choice
/// outranks any heuristic score.
pub const MANUAL_CONFIDENCE: f32 = 1.0;

/// The mapping state of one source column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMapping {
    /// Zero-based index of the column in the source header row.
    pub column_index: usize,
    /// The raw header text, trimmed.
    pub header: String,
    /// Mapped target field, or `None` for an unmapped column.
    pub field: Option<TargetField>,
    /// Confidence in `[0, 1]`; 0 when unmapped.
    pub confidence: f32,
}

/// Aggregate outcome of analyzing one header row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingResult {
    /// One entry per source column, in column order.
    pub mappings: Vec<ColumnMapping>,
    /// Indices of columns with no mapped field.
    pub unmapped_columns: Vec<usize>,
    /// Mandatory target fields not covered by any column.
    pub missing_required: Vec<TargetField>,
    /// True iff every mandatory field is mapped.
    pub is_valid: bool,
}

impl MappingResult {
    /// The column currently mapped to `field`, if any.
    #[must_use]
    pub fn column_for(&self, field: TargetField) -> Option<&ColumnMapping> {
        self.mappings
            .iter()
            .find(|mapping| mapping.field == Some(field))
    }

    /// Columns that carry a mapped field, in column order.
    pub fn mapped(&self) -> impl Iterator<Item = &ColumnMapping> {
        self.mappings.iter().filter(|mapping| mapping.field.is_some())
    }

    /// Fails with the missing mandatory fields when the mapping is not
    /// yet complete enough for row parsing.
    pub fn require_valid(&self) -> Result<(), crate::error::MappingError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(crate::error::MappingError::MissingRequired(
                self.missing_required.clone(),
            ))
        }
    }
}

/// Analyzes a header row, producing one [`ColumnMapping`] per column.
///
/// Pure function of its input: the same headers always produce the same
/// result. When two columns match the same field, the higher confidence
/// wins and the loser is cleared to unmapped; confidence ties go to the
/// lower column index.
#[must_use]
pub fn analyze_headers(headers: &[String]) -> MappingResult {
    let mut mappings: Vec<ColumnMapping> = headers
        .iter()
        .enumerate()
        .map(|(column_index, header)| {
            let matched = match_header(header);
            ColumnMapping {
                column_index,
                header: header.trim().to_string(),
                field: matched.field,
                confidence: if matched.field.is_some() {
                    matched.confidence
                } else {
                    0.0
                },
            }
        })
        .collect();
    resolve_conflicts(&mut mappings);
    let result = finish(mappings);
    debug!(
        columns = headers.len(),
        mapped = result.mapped().count(),
        valid = result.is_valid,
        "analyzed header row"
    );
    result
}

/// Reassigns one column's target field, returning a new result.
///
/// Assigning a field already held by another column clears that other
/// column, preserving the at-most-one-column-per-field invariant.
/// Assigning `None` makes the column unmapped. Manual assignments carry
/// [`MANUAL_CONFIDENCE`]. All derived state is recomputed from scratch.
#[must_use]
pub fn update_mapping(
    result: &MappingResult,
    column_index: usize,
    field: Option<TargetField>,
) -> MappingResult {
    let mut mappings = result.mappings.clone();
    for mapping in &mut mappings {
        if mapping.column_index == column_index {
            mapping.field = field;
            mapping.confidence = if field.is_some() {
                MANUAL_CONFIDENCE
            } else {
                0.0
            };
        } else if field.is_some() && mapping.field == field {
            mapping.field = None;
            mapping.confidence = 0.0;
        }
    }
    finish(mappings)
}

/// Clears all but the strongest claimant of each contested field.
fn resolve_conflicts(mappings: &mut [ColumnMapping]) {
    for field in TargetField::ALL {
        let mut winner: Option<usize> = None;
        for index in 0..mappings.len() {
            if mappings[index].field != Some(field) {
                continue;
            }
            match winner {
                None => winner = Some(index),
                Some(current) if mappings[index].confidence > mappings[current].confidence => {
                    clear(&mut mappings[current]);
                    winner = Some(index);
                }
                Some(_) => clear(&mut mappings[index]),
            }
        }
    }
}

fn clear(mapping: &mut ColumnMapping) {
    mapping.field = None;
    mapping.confidence = 0.0;
}

/// Rebuilds every derived part of a [`MappingResult`] from the per-column
/// mappings. The single construction path after analysis and after every
/// reassignment.
fn finish(mappings: Vec<ColumnMapping>) -> MappingResult {
    let unmapped_columns: Vec<usize> = mappings
        .iter()
        .filter(|mapping| mapping.field.is_none())
        .map(|mapping| mapping.column_index)
        .collect();
    let missing_required: Vec<TargetField> = TargetField::ALL
        .into_iter()
        .filter(|field| {
            field.is_required()
                && !mappings.iter().any(|mapping| mapping.field == Some(*field))
        })
        .collect();
    let is_valid = missing_required.is_empty();
    MappingResult {
        mappings,
        unmapped_columns,
        missing_required,
        is_valid,
    }
}
