//! Conversion between caller-facing currency amounts and the store's
//! integer minor-unit representation.
//!
//! Callers talk in major units (dollars, `49.99`); `properties.cost_per_night`
//! stores minor units (cents, `4999`) in an `INTEGER` column. Every price that
//! crosses into a statement goes through [`to_cents`].

use bigdecimal::{BigDecimal, ToPrimitive};
use thiserror::Error;

/// Minor units per major unit.
pub const CENTS_PER_UNIT: i32 = 100;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("amount {0} is negative")]
    Negative(String),

    #[error("amount {0} has a fraction of a cent")]
    FractionalCents(String),

    #[error("amount {0} does not fit the stored cents column")]
    OutOfRange(String),
}

/// Scales a major-unit amount to cents, rejecting negatives, sub-cent
/// precision and values that overflow a 32-bit column.
pub fn to_cents(amount: &BigDecimal) -> Result<i32, MoneyError> {
    if *amount < BigDecimal::from(0) {
        return Err(MoneyError::Negative(amount.to_string()));
    }

    let scaled = amount * BigDecimal::from(CENTS_PER_UNIT);
    if !scaled.is_integer() {
        return Err(MoneyError::FractionalCents(amount.to_string()));
    }

    scaled
        .to_i32()
        .ok_or_else(|| MoneyError::OutOfRange(amount.to_string()))
}
