//! In-memory `StoreExecutor` used by the repository tests.

use crate::sql::base::{error::StoreError, executor::StoreExecutor};
use async_trait::async_trait;
use lightbnb_model::{core::value::Value, records::row::RowData};
use std::{collections::VecDeque, sync::Mutex};

/// Replays queued responses in order and records every statement it sees.
#[derive(Default)]
pub(crate) struct MemoryExecutor {
    responses: Mutex<VecDeque<Result<Vec<RowData>, StoreError>>>,
    calls: Mutex<Vec<(String, Vec<Value>)>>,
}

impl MemoryExecutor {
    pub(crate) fn respond(self, rows: Vec<RowData>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(rows));
        self
    }

    pub(crate) fn fail(self, err: StoreError) -> Self {
        self.responses.lock().unwrap().push_back(Err(err));
        self
    }

    pub(crate) fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StoreExecutor for MemoryExecutor {
    async fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<RowData>, StoreError> {
        self.calls
            .lock()
            .unwrap()
            .push((sql.to_string(), params.to_vec()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
