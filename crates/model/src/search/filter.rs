use crate::{core::identifiers::UserId, search::error::InvalidFilter};
use bigdecimal::BigDecimal;
use serde::Serialize;

/// Result-set size used when the caller does not ask for one.
pub const DEFAULT_LIMIT: i64 = 10;

/// A strictly positive row limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Limit(i64);

impl Limit {
    pub fn new(limit: i64) -> Result<Self, InvalidFilter> {
        if limit <= 0 {
            return Err(InvalidFilter::NonPositiveLimit(limit));
        }
        Ok(Limit(limit))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl Default for Limit {
    fn default() -> Self {
        Limit(DEFAULT_LIMIT)
    }
}

/// Inclusive nightly price bounds, already in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    min_cents: i32,
    max_cents: i32,
}

impl PriceRange {
    pub fn new(min_cents: i32, max_cents: i32) -> Result<Self, InvalidFilter> {
        if min_cents > max_cents {
            return Err(InvalidFilter::InvertedPriceRange {
                min: min_cents.to_string(),
                max: max_cents.to_string(),
            });
        }
        Ok(PriceRange {
            min_cents,
            max_cents,
        })
    }

    pub fn min_cents(&self) -> i32 {
        self.min_cents
    }

    pub fn max_cents(&self) -> i32 {
        self.max_cents
    }
}

/// Validated property-search criteria. Every `None` is an inactive filter.
///
/// `city` is the raw substring; wrapping it for a `LIKE` match is the
/// compiler's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchFilter {
    pub city: Option<String>,
    pub owner_id: Option<UserId>,
    pub price_range: Option<PriceRange>,
    pub minimum_rating: Option<BigDecimal>,
    pub limit: Limit,
}

impl SearchFilter {
    /// Filter with no active predicates and the default limit.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_owner(mut self, owner_id: UserId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }

    pub fn with_minimum_rating(mut self, rating: BigDecimal) -> Result<Self, InvalidFilter> {
        check_rating(&rating)?;
        self.minimum_rating = Some(rating);
        Ok(self)
    }

    pub fn with_limit(mut self, limit: Limit) -> Self {
        self.limit = limit;
        self
    }
}

pub(crate) fn check_rating(rating: &BigDecimal) -> Result<(), InvalidFilter> {
    if *rating < BigDecimal::from(0) || *rating > BigDecimal::from(5) {
        return Err(InvalidFilter::RatingOutOfRange(rating.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_limit_must_be_positive() {
        assert_eq!(Limit::new(0), Err(InvalidFilter::NonPositiveLimit(0)));
        assert_eq!(Limit::new(-4), Err(InvalidFilter::NonPositiveLimit(-4)));
        assert_eq!(Limit::new(1).unwrap().get(), 1);
        assert_eq!(Limit::default().get(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_degenerate_price_range_is_accepted() {
        let range = PriceRange::new(5000, 5000).unwrap();
        assert_eq!(range.min_cents(), range.max_cents());
        assert!(PriceRange::new(6000, 5000).is_err());
    }

    #[test]
    fn test_builder_rejects_out_of_range_rating() {
        let err = SearchFilter::new()
            .with_minimum_rating(BigDecimal::from_str("5.1").unwrap())
            .unwrap_err();
        assert_eq!(err, InvalidFilter::RatingOutOfRange("5.1".into()));
    }

    #[test]
    fn test_builders_set_only_their_filter() {
        let filter = SearchFilter::new()
            .with_city("van")
            .with_limit(Limit::new(3).unwrap());
        assert_eq!(filter.city.as_deref(), Some("van"));
        assert_eq!(filter.limit.get(), 3);
        assert!(filter.owner_id.is_none());
        assert!(filter.price_range.is_none());
        assert!(filter.minimum_rating.is_none());
    }
}
