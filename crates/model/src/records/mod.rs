pub mod error;
pub mod property;
pub mod reservation;
pub mod row;
pub mod user;

use crate::records::{error::RecordError, row::RowData};

/// Decodes a domain record from a result row.
pub trait FromRow: Sized {
    fn from_row(row: &RowData) -> Result<Self, RecordError>;
}
