use crate::{
    settings::StoreSettings,
    sql::{
        base::{error::StoreError, executor::StoreExecutor},
        postgres::{params::PgParamStore, row, utils::connect_client},
    },
};
use async_trait::async_trait;
use lightbnb_model::{core::value::Value, records::row::RowData};
use std::sync::Arc;
use tokio_postgres::Client;
use tracing::{debug, info};

/// A `StoreExecutor` backed by a single `tokio_postgres` client.
///
/// Clones share the client. The driver's `Client` takes `&self` for every
/// call, so concurrent statements are pipelined without a lock.
#[derive(Clone)]
pub struct PgAdapter {
    client: Arc<Client>,
}

impl PgAdapter {
    pub async fn connect(settings: &StoreSettings) -> Result<Self, StoreError> {
        let config = settings.pg_config();
        info!(
            hosts = ?config.get_hosts(),
            dbname = ?config.get_dbname(),
            "Connecting to Postgres"
        );
        let client = Arc::new(connect_client(config).await?);
        Ok(PgAdapter { client })
    }

    /// Runs a batch of semicolon-separated statements without parameters,
    /// e.g. a schema script.
    pub async fn exec(&self, script: &str) -> Result<(), StoreError> {
        self.client.batch_execute(script).await?;
        Ok(())
    }
}

#[async_trait]
impl StoreExecutor for PgAdapter {
    async fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<RowData>, StoreError> {
        let bindings = PgParamStore::from_values(params)?;
        let rows = self.client.query(sql, &bindings.as_refs()).await?;
        debug!(rows = rows.len(), "Postgres query returned");

        rows.iter().map(|r| row::to_row_data(r, "")).collect()
    }
}
