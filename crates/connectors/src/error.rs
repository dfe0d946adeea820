use crate::sql::base::error::StoreError;
use lightbnb_model::{records::error::RecordError, search::InvalidFilter};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The caller's search or listing options were rejected before any
    /// statement was sent.
    #[error("Invalid filter: {0}")]
    InvalidFilter(#[from] InvalidFilter),

    /// The store failed to execute a statement.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A returned row did not match the expected record shape.
    #[error("Record decode error: {0}")]
    Decode(#[from] RecordError),

    /// An `INSERT ... RETURNING` came back without a row.
    #[error("Insert into `{0}` returned no row")]
    MissingRow(&'static str),
}
