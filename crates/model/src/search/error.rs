use crate::core::money::MoneyError;
use thiserror::Error;

/// Malformed caller input, reported before any store interaction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidFilter {
    #[error("price range needs both a minimum and a maximum")]
    PartialPriceRange,

    #[error("minimum price {min} exceeds maximum price {max}")]
    InvertedPriceRange { min: String, max: String },

    #[error("invalid price: {0}")]
    Price(#[from] MoneyError),

    #[error("minimum rating {0} is outside 0..=5")]
    RatingOutOfRange(String),

    #[error("owner id must be positive, got {0}")]
    InvalidOwnerId(i32),

    #[error("limit must be greater than zero, got {0}")]
    NonPositiveLimit(i64),
}
