use crate::sql::base::error::StoreError;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use lightbnb_model::{
    core::value::{FieldValue, Value},
    records::row::RowData,
};
use rust_decimal::Decimal as RustDecimal;
use std::str::FromStr;
use tokio_postgres::{Row as PgRow, types::FromSql};
use tracing::warn;

/// Decodes every column of a driver row into a `RowData`, keeping select
/// order. Columns of a type the store layer never reads are kept as `NULL`
/// with a warning.
pub fn to_row_data(row: &PgRow, entity: &str) -> Result<RowData, StoreError> {
    let field_values = row
        .columns()
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            Ok(FieldValue {
                name: column.name().to_string(),
                value: decode_column(row, idx, column.name(), column.type_().name())?,
            })
        })
        .collect::<Result<Vec<_>, StoreError>>()?;

    Ok(RowData::new(entity, field_values))
}

fn decode_column(
    row: &PgRow,
    idx: usize,
    name: &str,
    type_name: &str,
) -> Result<Option<Value>, StoreError> {
    let value = match type_name {
        "int2" => get::<i16>(row, idx, name)?.map(|v| Value::Int32(v as i32)),
        "int4" => get::<i32>(row, idx, name)?.map(Value::Int32),
        "int8" => get::<i64>(row, idx, name)?.map(Value::Int),
        "numeric" => match get::<RustDecimal>(row, idx, name)? {
            Some(decimal) => Some(Value::Decimal(to_big_decimal(&decimal, name)?)),
            None => None,
        },
        "text" | "varchar" | "bpchar" | "name" => get::<String>(row, idx, name)?.map(Value::String),
        "bool" => get::<bool>(row, idx, name)?.map(Value::Boolean),
        "date" => get::<NaiveDate>(row, idx, name)?.map(Value::Date),
        other => {
            warn!(column = name, type_name = other, "Unsupported column type, reading as NULL");
            None
        }
    };
    Ok(value)
}

fn get<'a, T: FromSql<'a>>(row: &'a PgRow, idx: usize, name: &str) -> Result<Option<T>, StoreError> {
    row.try_get::<_, Option<T>>(idx)
        .map_err(|err| StoreError::Decode {
            column: name.to_string(),
            reason: err.to_string(),
        })
}

fn to_big_decimal(decimal: &RustDecimal, name: &str) -> Result<BigDecimal, StoreError> {
    BigDecimal::from_str(&decimal.to_string()).map_err(|err| StoreError::Decode {
        column: name.to_string(),
        reason: err.to_string(),
    })
}
