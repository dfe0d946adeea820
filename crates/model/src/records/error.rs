use thiserror::Error;

/// Raised when a result row cannot be mapped to a domain record.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecordError {
    #[error("column `{column}` is missing from `{entity}` row")]
    MissingColumn { entity: String, column: String },

    #[error("column `{column}` of `{entity}` is NULL")]
    UnexpectedNull { entity: String, column: String },

    #[error("column `{column}` of `{entity}` holds {found}, expected {expected}")]
    TypeMismatch {
        entity: String,
        column: String,
        expected: &'static str,
        found: String,
    },
}
