use crate::{
    query::{
        builder::insert::InsertBuilder,
        catalog::{PROPERTIES, compile},
        compiled::CompiledQuery,
        value, wildcard,
    },
    table_ref,
};
use lightbnb_model::records::property::NewProperty;

/// Inserts a property and returns the stored row.
pub fn insert_property(property: &NewProperty) -> CompiledQuery {
    let insert = InsertBuilder::new(table_ref!(PROPERTIES))
        .set("owner_id", value(property.owner_id))
        .set("title", value(property.title.as_str()))
        .set("description", value(property.description.clone()))
        .set(
            "thumbnail_photo_url",
            value(property.thumbnail_photo_url.as_str()),
        )
        .set("cover_photo_url", value(property.cover_photo_url.as_str()))
        .set("cost_per_night", value(property.cost_per_night))
        .set("street", value(property.street.as_str()))
        .set("city", value(property.city.as_str()))
        .set("province", value(property.province.as_str()))
        .set("post_code", value(property.post_code.as_str()))
        .set("country", value(property.country.as_str()))
        .set("parking_spaces", value(property.parking_spaces))
        .set("number_of_bathrooms", value(property.number_of_bathrooms))
        .set("number_of_bedrooms", value(property.number_of_bedrooms))
        .returning(vec![wildcard(None)])
        .build();

    compile(&insert)
}
