use crate::{
    col,
    query::{
        builder::{insert::InsertBuilder, select::SelectBuilder},
        catalog::{USERS, compile},
        compiled::CompiledQuery,
        value, wildcard,
    },
    table_ref,
};
use lightbnb_model::{core::identifiers::UserId, records::user::NewUser};

/// `SELECT * FROM users WHERE email = $1`
pub fn user_by_email(email: &str) -> CompiledQuery {
    let select = SelectBuilder::new()
        .select(vec![wildcard(None)])
        .from(table_ref!(USERS), None)
        .and_where(col!(email).equals(value(email)))
        .build();
    compile(&select)
}

/// `SELECT * FROM users WHERE id = $1`
pub fn user_by_id(id: UserId) -> CompiledQuery {
    let select = SelectBuilder::new()
        .select(vec![wildcard(None)])
        .from(table_ref!(USERS), None)
        .and_where(col!(id).equals(value(id)))
        .build();
    compile(&select)
}

/// Inserts a user and returns the stored row.
pub fn insert_user(user: &NewUser) -> CompiledQuery {
    let insert = InsertBuilder::new(table_ref!(USERS))
        .set("name", value(user.name.as_str()))
        .set("email", value(user.email.as_str()))
        .set("password", value(user.password.as_str()))
        .returning(vec![wildcard(None)])
        .build();
    compile(&insert)
}
