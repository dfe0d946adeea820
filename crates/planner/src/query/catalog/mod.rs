//! The statements issued by the listing repository.
//!
//! Each function takes already-validated input and returns a
//! [`CompiledQuery`]; none of them can fail.

use crate::query::{
    compiled::CompiledQuery,
    dialect::Postgres,
    renderer::{Render, Renderer},
};

pub mod properties;
pub mod reservations;
pub mod search;
pub mod users;

pub use properties::insert_property;
pub use reservations::reservations_for_guest;
pub use search::search_properties;
pub use users::{insert_user, user_by_email, user_by_id};

pub const USERS: &str = "users";
pub const PROPERTIES: &str = "properties";
pub const PROPERTY_REVIEWS: &str = "property_reviews";
pub const RESERVATIONS: &str = "reservations";

/// Alias of the aggregated review score in property listings.
pub const AVERAGE_RATING: &str = "average_rating";

fn compile<T: Render>(ast: &T) -> CompiledQuery {
    let dialect = Postgres;
    let mut renderer = Renderer::new(&dialect);
    ast.render(&mut renderer);
    renderer.finish()
}
