use crate::{
    core::identifiers::{PropertyId, UserId},
    records::{FromRow, error::RecordError, row::RowData},
};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// A row of `properties`, optionally carrying the aggregated review score
/// when it was selected alongside (`average_rating`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub owner_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Stored price in cents.
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
    pub average_rating: Option<BigDecimal>,
}

/// Fields supplied when listing a new property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProperty {
    pub owner_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Price in cents; convert caller amounts with `core::money::to_cents`.
    pub cost_per_night: i32,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
}

impl FromRow for Property {
    fn from_row(row: &RowData) -> Result<Self, RecordError> {
        Ok(Property {
            id: PropertyId::new(row.require_i32("id")?),
            owner_id: UserId::new(row.require_i32("owner_id")?),
            title: row.require_string("title")?,
            description: row.optional_string("description")?,
            thumbnail_photo_url: row.require_string("thumbnail_photo_url")?,
            cover_photo_url: row.require_string("cover_photo_url")?,
            cost_per_night: row.require_i32("cost_per_night")?,
            parking_spaces: row.optional_i32("parking_spaces")?.unwrap_or(0),
            number_of_bathrooms: row.optional_i32("number_of_bathrooms")?.unwrap_or(0),
            number_of_bedrooms: row.optional_i32("number_of_bedrooms")?.unwrap_or(0),
            country: row.require_string("country")?,
            street: row.require_string("street")?,
            city: row.require_string("city")?,
            province: row.require_string("province")?,
            post_code: row.require_string("post_code")?,
            active: row.get("active").is_none() || row.require_bool("active")?,
            average_rating: row.optional_decimal("average_rating")?,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::value::Value;
    use std::str::FromStr;

    pub(crate) fn property_pairs() -> Vec<(&'static str, Value)> {
        vec![
            ("id", Value::Int32(12)),
            ("owner_id", Value::Int32(4)),
            ("title", Value::from("Cozy loft")),
            ("description", Value::Null),
            ("thumbnail_photo_url", Value::from("https://img/t.jpg")),
            ("cover_photo_url", Value::from("https://img/c.jpg")),
            ("cost_per_night", Value::Int32(9350)),
            ("parking_spaces", Value::Int32(1)),
            ("number_of_bathrooms", Value::Int32(2)),
            ("number_of_bedrooms", Value::Int32(3)),
            ("country", Value::from("Canada")),
            ("street", Value::from("536 Namsub Highway")),
            ("city", Value::from("Vancouver")),
            ("province", Value::from("BC")),
            ("post_code", Value::from("28142")),
            ("active", Value::Boolean(true)),
        ]
    }

    #[test]
    fn test_decode_search_row_with_rating() {
        let mut pairs = property_pairs();
        pairs.push((
            "average_rating",
            Value::Decimal(BigDecimal::from_str("4.25").unwrap()),
        ));
        let property = Property::from_row(&RowData::from_pairs("properties", pairs)).unwrap();

        assert_eq!(property.id, PropertyId::new(12));
        assert_eq!(property.description, None);
        assert_eq!(
            property.average_rating,
            Some(BigDecimal::from_str("4.25").unwrap())
        );
    }

    #[test]
    fn test_decode_inserted_row_without_rating() {
        let row = RowData::from_pairs("properties", property_pairs());
        let property = Property::from_row(&row).unwrap();
        assert_eq!(property.average_rating, None);
        assert_eq!(property.cost_per_night, 9350);
    }
}
