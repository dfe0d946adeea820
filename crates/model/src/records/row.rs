use crate::{
    core::value::{FieldValue, Value},
    records::error::RecordError,
};
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One result row: column names in select order, each with its decoded value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RowData {
    pub entity: String,
    pub field_values: Vec<FieldValue>,
}

impl RowData {
    pub fn new(entity: &str, field_values: Vec<FieldValue>) -> Self {
        RowData {
            entity: entity.to_string(),
            field_values,
        }
    }

    /// Builds a row from `(column, value)` pairs; `Value::Null` becomes SQL NULL.
    pub fn from_pairs<I, K>(entity: &str, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let field_values = pairs
            .into_iter()
            .map(|(name, value)| FieldValue {
                name: name.into(),
                value: (!value.is_null()).then_some(value),
            })
            .collect();
        RowData::new(entity, field_values)
    }

    /// First column with the given name. Matching is case-insensitive.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.field_values
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(field))
    }

    pub fn require_i32(&self, column: &str) -> Result<i32, RecordError> {
        let value = self.require(column)?;
        value
            .as_i32()
            .ok_or_else(|| self.mismatch(column, "integer", value))
    }

    pub fn require_string(&self, column: &str) -> Result<String, RecordError> {
        match self.require(column)? {
            Value::String(s) => Ok(s.clone()),
            other => Err(self.mismatch(column, "text", other)),
        }
    }

    pub fn require_date(&self, column: &str) -> Result<NaiveDate, RecordError> {
        let value = self.require(column)?;
        value
            .as_date()
            .ok_or_else(|| self.mismatch(column, "date", value))
    }

    pub fn require_bool(&self, column: &str) -> Result<bool, RecordError> {
        let value = self.require(column)?;
        value
            .as_bool()
            .ok_or_else(|| self.mismatch(column, "boolean", value))
    }

    pub fn optional_string(&self, column: &str) -> Result<Option<String>, RecordError> {
        match self.optional(column)? {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(self.mismatch(column, "text", other)),
        }
    }

    pub fn optional_i32(&self, column: &str) -> Result<Option<i32>, RecordError> {
        match self.optional(column)? {
            None => Ok(None),
            Some(value) => value
                .as_i32()
                .map(Some)
                .ok_or_else(|| self.mismatch(column, "integer", value)),
        }
    }

    /// Like the other `optional_*` accessors, but a column that is absent
    /// from the select list also yields `None`.
    pub fn optional_decimal(&self, column: &str) -> Result<Option<BigDecimal>, RecordError> {
        let Some(field) = self.get(column) else {
            return Ok(None);
        };
        match &field.value {
            None => Ok(None),
            Some(value) => value
                .as_decimal()
                .map(Some)
                .ok_or_else(|| self.mismatch(column, "numeric", value)),
        }
    }

    fn require(&self, column: &str) -> Result<&Value, RecordError> {
        self.optional(column)?
            .ok_or_else(|| RecordError::UnexpectedNull {
                entity: self.entity.clone(),
                column: column.to_string(),
            })
    }

    fn optional(&self, column: &str) -> Result<Option<&Value>, RecordError> {
        self.get(column)
            .map(|f| f.value.as_ref())
            .ok_or_else(|| RecordError::MissingColumn {
                entity: self.entity.clone(),
                column: column.to_string(),
            })
    }

    fn mismatch(&self, column: &str, expected: &'static str, found: &Value) -> RecordError {
        RecordError::TypeMismatch {
            entity: self.entity.clone(),
            column: column.to_string(),
            expected,
            found: format!("{found:?}"),
        }
    }
}
