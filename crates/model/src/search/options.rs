use crate::{
    core::{identifiers::UserId, money},
    search::{
        error::InvalidFilter,
        filter::{Limit, PriceRange, SearchFilter, check_rating},
    },
};
use bigdecimal::BigDecimal;
use serde::Deserialize;

/// Raw search options as they arrive from a caller (query string, JSON body).
///
/// Prices are in major currency units. Any option left out is inactive; an
/// empty `city` counts as left out.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub city: Option<String>,
    pub owner_id: Option<i32>,
    pub minimum_price_per_night: Option<BigDecimal>,
    pub maximum_price_per_night: Option<BigDecimal>,
    pub minimum_rating: Option<BigDecimal>,
    pub limit: Option<i64>,
}

impl SearchOptions {
    pub fn validate(&self) -> Result<SearchFilter, InvalidFilter> {
        let city = self
            .city
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        let owner_id = match self.owner_id {
            Some(id) if id <= 0 => return Err(InvalidFilter::InvalidOwnerId(id)),
            Some(id) => Some(UserId::new(id)),
            None => None,
        };

        let price_range = match (
            &self.minimum_price_per_night,
            &self.maximum_price_per_night,
        ) {
            (None, None) => None,
            (Some(min), Some(max)) => {
                if min > max {
                    return Err(InvalidFilter::InvertedPriceRange {
                        min: min.to_string(),
                        max: max.to_string(),
                    });
                }
                Some(PriceRange::new(money::to_cents(min)?, money::to_cents(max)?)?)
            }
            _ => return Err(InvalidFilter::PartialPriceRange),
        };

        if let Some(rating) = &self.minimum_rating {
            check_rating(rating)?;
        }

        let limit = match self.limit {
            Some(limit) => Limit::new(limit)?,
            None => Limit::default(),
        };

        Ok(SearchFilter {
            city,
            owner_id,
            price_range,
            minimum_rating: self.minimum_rating.clone(),
            limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::money::MoneyError;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_empty_options_use_default_limit() {
        let filter = SearchOptions::default().validate().unwrap();
        assert_eq!(filter, SearchFilter::new());
        assert_eq!(filter.limit.get(), 10);
    }

    #[test]
    fn test_price_range_is_scaled_to_cents() {
        let options = SearchOptions {
            minimum_price_per_night: Some(dec("50")),
            maximum_price_per_night: Some(dec("120.50")),
            ..Default::default()
        };
        let range = options.validate().unwrap().price_range.unwrap();
        assert_eq!(range.min_cents(), 5000);
        assert_eq!(range.max_cents(), 12050);
    }

    #[test]
    fn test_single_value_price_range_is_valid() {
        let options = SearchOptions {
            minimum_price_per_night: Some(dec("50")),
            maximum_price_per_night: Some(dec("50")),
            ..Default::default()
        };
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_partial_price_range_is_rejected() {
        let only_min = SearchOptions {
            minimum_price_per_night: Some(dec("50")),
            ..Default::default()
        };
        let only_max = SearchOptions {
            maximum_price_per_night: Some(dec("50")),
            ..Default::default()
        };
        assert_eq!(only_min.validate(), Err(InvalidFilter::PartialPriceRange));
        assert_eq!(only_max.validate(), Err(InvalidFilter::PartialPriceRange));
    }

    #[test]
    fn test_inverted_and_malformed_prices_are_rejected() {
        let inverted = SearchOptions {
            minimum_price_per_night: Some(dec("200")),
            maximum_price_per_night: Some(dec("100")),
            ..Default::default()
        };
        assert!(matches!(
            inverted.validate(),
            Err(InvalidFilter::InvertedPriceRange { .. })
        ));

        let fractional = SearchOptions {
            minimum_price_per_night: Some(dec("10.001")),
            maximum_price_per_night: Some(dec("20")),
            ..Default::default()
        };
        assert!(matches!(
            fractional.validate(),
            Err(InvalidFilter::Price(MoneyError::FractionalCents(_)))
        ));
    }

    #[test]
    fn test_rating_bounds_are_inclusive() {
        for ok in ["0", "4.5", "5"] {
            let options = SearchOptions {
                minimum_rating: Some(dec(ok)),
                ..Default::default()
            };
            assert!(options.validate().is_ok(), "rating {ok} should pass");
        }
        for bad in ["-0.1", "5.01"] {
            let options = SearchOptions {
                minimum_rating: Some(dec(bad)),
                ..Default::default()
            };
            assert!(matches!(
                options.validate(),
                Err(InvalidFilter::RatingOutOfRange(_))
            ));
        }
    }

    #[test]
    fn test_non_positive_limit_and_owner() {
        let zero_limit = SearchOptions {
            limit: Some(0),
            ..Default::default()
        };
        assert_eq!(zero_limit.validate(), Err(InvalidFilter::NonPositiveLimit(0)));

        let bad_owner = SearchOptions {
            owner_id: Some(-2),
            ..Default::default()
        };
        assert_eq!(bad_owner.validate(), Err(InvalidFilter::InvalidOwnerId(-2)));
    }

    #[test]
    fn test_empty_city_is_inactive() {
        let options = SearchOptions {
            city: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(options.validate().unwrap().city, None);
    }

    #[test]
    fn test_deserialize_from_json_with_omitted_fields() {
        let options: SearchOptions =
            serde_json::from_str(r#"{"city": "van", "limit": 5}"#).unwrap();
        let filter = options.validate().unwrap();
        assert_eq!(filter.city.as_deref(), Some("van"));
        assert_eq!(filter.limit.get(), 5);
        assert!(filter.price_range.is_none());
    }
}
