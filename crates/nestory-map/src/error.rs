//! Error types for mapping operations.

use std::fmt;

use nestory_model::TargetField;

/// Errors from mapping operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// The mapping does not cover every mandatory target field.
    MissingRequired(Vec<TargetField>),
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired(fields) => {
                let names: Vec<&str> = fields.iter().map(TargetField::display_name).collect();
                write!(
                    f,
                    "mapping does not cover mandatory fields: {}",
                    names.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for MappingError {}
