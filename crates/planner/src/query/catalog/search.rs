//! Property search: one statement for any combination of filters.
//!
//! The statement always has the shape
//!
//! ```text
//! SELECT properties.*, AVG(rating) AS average_rating
//! FROM properties JOIN property_reviews ON properties.id = property_reviews.property_id
//! [WHERE city LIKE $a] [AND owner_id = $b] [AND cost_per_night BETWEEN $c AND $d]
//! GROUP BY properties.id
//! [HAVING AVG(rating) >= $e]
//! ORDER BY cost_per_night ASC LIMIT $n
//! ```
//!
//! Predicates are added in a fixed order (city, owner, price) and the
//! renderer numbers placeholders as values are emitted, so whichever subset
//! is active the indices run `$1..$n` with the limit last.

use crate::{
    col,
    query::{
        ast::{
            common::{JoinKind, OrderDir},
            expr::Expr,
        },
        builder::select::SelectBuilder,
        catalog::{AVERAGE_RATING, PROPERTIES, PROPERTY_REVIEWS, compile},
        compiled::CompiledQuery,
        function, value, wildcard,
    },
    table_ref,
};
use lightbnb_model::search::SearchFilter;

pub fn search_properties(filter: &SearchFilter) -> CompiledQuery {
    let city = filter
        .city
        .as_deref()
        .map(|city| col!(city).like(value(contains_pattern(city))));
    let owner = filter
        .owner_id
        .map(|owner_id| col!(owner_id).equals(value(owner_id)));
    let price = filter.price_range.map(|range| {
        col!(cost_per_night).between(value(range.min_cents()), value(range.max_cents()))
    });
    let rating = filter
        .minimum_rating
        .clone()
        .map(|minimum| average_rating().gt_eq(value(minimum)));

    let select = SelectBuilder::new()
        .select(vec![
            wildcard(Some(PROPERTIES)),
            average_rating().alias(AVERAGE_RATING),
        ])
        .from(table_ref!(PROPERTIES), None)
        .join(
            JoinKind::Inner,
            table_ref!(PROPERTY_REVIEWS),
            None,
            col!(properties.id).equals(col!(property_reviews.property_id)),
        )
        .and_where_opt(city)
        .and_where_opt(owner)
        .and_where_opt(price)
        .group_by(col!(properties.id))
        .and_having_opt(rating)
        .order_by(col!(cost_per_night), Some(OrderDir::Asc))
        .limit(value(filter.limit.get()))
        .build();

    compile(&select)
}

pub(crate) fn average_rating() -> Expr {
    function("AVG", vec![col!(rating)])
}

/// `LIKE` pattern matching `needle` anywhere, with the needle's own `%`,
/// `_` and `\` taken literally.
fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
