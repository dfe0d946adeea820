use crate::sql::base::error::StoreError;
use bigdecimal::BigDecimal;
use lightbnb_model::core::value::Value;
use rust_decimal::Decimal as RustDecimal;
use tokio_postgres::types::ToSql;

pub struct PgParam(Box<dyn ToSql + Sync + Send>);

impl PgParam {
    /// Converts one bind value. `position` is the one-based placeholder
    /// index, used only for error reporting.
    pub fn from_value(value: Value, position: usize) -> Result<Self, StoreError> {
        let param = match value {
            Value::Int32(v) => PgParam(Box::new(v)),
            Value::Int(v) => PgParam(Box::new(v)),
            Value::Decimal(v) => PgParam(Box::new(exact_decimal(&v, position)?)),
            Value::String(v) => PgParam(Box::new(v)),
            Value::Boolean(v) => PgParam(Box::new(v)),
            Value::Date(v) => PgParam(Box::new(v)),
            Value::Null => PgParam(Box::new(Option::<std::string::String>::None)),
        };
        Ok(param)
    }
}

/// `NUMERIC` binds go through `rust_decimal`, which holds at most 28
/// fractional digits. Anything it cannot hold exactly is an error, never
/// a rounded value.
fn exact_decimal(value: &BigDecimal, position: usize) -> Result<RustDecimal, StoreError> {
    RustDecimal::from_str_exact(&value.to_plain_string()).map_err(|err| StoreError::Bind {
        position,
        reason: format!("{value} is not exactly representable as NUMERIC: {err}"),
    })
}

impl AsRef<dyn ToSql + Sync> for PgParam {
    fn as_ref(&self) -> &(dyn ToSql + Sync + 'static) {
        &*self.0
    }
}

/// Owns the boxed bind values for one statement so they can be lent to the
/// driver as `&[&(dyn ToSql + Sync)]`.
pub struct PgParamStore {
    pub params: Vec<PgParam>,
}

impl PgParamStore {
    pub fn from_values(values: &[Value]) -> Result<Self, StoreError> {
        let params = values
            .iter()
            .cloned()
            .enumerate()
            .map(|(idx, value)| PgParam::from_value(value, idx + 1))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { params })
    }

    pub fn as_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|param| param.as_ref())
            .collect::<Vec<_>>()
    }
}
