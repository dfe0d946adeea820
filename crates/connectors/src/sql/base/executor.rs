use crate::sql::base::error::StoreError;
use async_trait::async_trait;
use lightbnb_model::{core::value::Value, records::row::RowData};

/// Runs one parameterized statement and returns its rows in order.
///
/// `params[i]` binds placeholder `$(i + 1)`. Implementations do not retry.
#[async_trait]
pub trait StoreExecutor: Send + Sync {
    async fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<RowData>, StoreError>;
}
