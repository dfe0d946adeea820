use crate::{
    col,
    query::{
        ast::common::{JoinKind, OrderDir},
        builder::select::SelectBuilder,
        catalog::{AVERAGE_RATING, PROPERTIES, PROPERTY_REVIEWS, RESERVATIONS, compile, search},
        compiled::CompiledQuery,
        value, wildcard,
    },
    table_ref,
};
use lightbnb_model::{core::identifiers::UserId, search::Limit};

/// A guest's reservations, newest first, each with its property and the
/// property's average review score.
///
/// The reservation id is selected as `reservation_id` so it does not shadow
/// `properties.id`.
pub fn reservations_for_guest(guest_id: UserId, limit: Limit) -> CompiledQuery {
    let select = SelectBuilder::new()
        .select(vec![
            wildcard(Some(PROPERTIES)),
            col!(reservations.id).alias("reservation_id"),
            col!(reservations.guest_id),
            col!(reservations.start_date),
            col!(reservations.end_date),
            search::average_rating().alias(AVERAGE_RATING),
        ])
        .from(table_ref!(RESERVATIONS), None)
        .join(
            JoinKind::Inner,
            table_ref!(PROPERTIES),
            None,
            col!(reservations.property_id).equals(col!(properties.id)),
        )
        .join(
            JoinKind::Inner,
            table_ref!(PROPERTY_REVIEWS),
            None,
            col!(properties.id).equals(col!(property_reviews.property_id)),
        )
        .and_where(col!(reservations.guest_id).equals(value(guest_id)))
        .group_by(col!(properties.id))
        .group_by(col!(reservations.id))
        .order_by(col!(reservations.start_date), Some(OrderDir::Desc))
        .limit(value(limit.get()))
        .build();

    compile(&select)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lightbnb_model::core::value::Value;

    #[test]
    fn test_reservations_for_guest() {
        let compiled = reservations_for_guest(UserId::new(1), Limit::default());

        assert_eq!(
            compiled.text(),
            "SELECT properties.*, reservations.id AS reservation_id, reservations.guest_id, \
             reservations.start_date, reservations.end_date, AVG(rating) AS average_rating \
             FROM reservations \
             JOIN properties ON reservations.property_id = properties.id \
             JOIN property_reviews ON properties.id = property_reviews.property_id \
             WHERE reservations.guest_id = $1 \
             GROUP BY properties.id, reservations.id \
             ORDER BY reservations.start_date DESC LIMIT $2"
        );
        assert_eq!(compiled.parameters(), &[Value::Int32(1), Value::Int(10)]);
    }
}
