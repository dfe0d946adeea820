use crate::{
    core::identifiers::{ReservationId, UserId},
    records::{FromRow, error::RecordError, property::Property, row::RowData},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A guest's reservation together with the reserved property.
///
/// Decoded from the reservation listing, which selects `properties.*` plus
/// the reservation columns aliased so they do not collide with the
/// property's own `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub guest_id: UserId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub property: Property,
}

impl FromRow for Reservation {
    fn from_row(row: &RowData) -> Result<Self, RecordError> {
        Ok(Reservation {
            id: ReservationId::new(row.require_i32("reservation_id")?),
            guest_id: UserId::new(row.require_i32("guest_id")?),
            start_date: row.require_date("start_date")?,
            end_date: row.require_date("end_date")?,
            property: Property::from_row(row)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{identifiers::PropertyId, value::Value},
        records::property::tests::property_pairs,
    };

    #[test]
    fn test_decode_reservation_with_property() {
        let mut pairs = property_pairs();
        pairs.extend([
            ("reservation_id", Value::Int32(77)),
            ("guest_id", Value::Int32(1)),
            (
                "start_date",
                Value::Date(NaiveDate::from_ymd_opt(2018, 9, 11).unwrap()),
            ),
            ("end_date", Value::from("2018-09-26")),
        ]);

        let reservation = Reservation::from_row(&RowData::from_pairs("reservations", pairs)).unwrap();
        assert_eq!(reservation.id, ReservationId::new(77));
        assert_eq!(reservation.property.id, PropertyId::new(12));
        assert_eq!(
            reservation.end_date,
            NaiveDate::from_ymd_opt(2018, 9, 26).unwrap()
        );
    }

    #[test]
    fn test_missing_reservation_alias_is_reported() {
        let row = RowData::from_pairs("reservations", property_pairs());
        assert!(matches!(
            Reservation::from_row(&row),
            Err(RecordError::MissingColumn { .. })
        ));
    }
}
