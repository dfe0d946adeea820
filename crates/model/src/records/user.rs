use crate::{
    core::identifiers::UserId,
    records::{FromRow, error::RecordError, row::RowData},
};
use serde::{Deserialize, Serialize};

/// A row of `users`. `password` holds whatever the auth layer stored, never
/// a plaintext secret produced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Fields supplied when registering a user; `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl FromRow for User {
    fn from_row(row: &RowData) -> Result<Self, RecordError> {
        Ok(User {
            id: UserId::new(row.require_i32("id")?),
            name: row.require_string("name")?,
            email: row.require_string("email")?,
            password: row.require_string("password")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::value::Value;

    #[test]
    fn test_decode_user_row() {
        let row = RowData::from_pairs(
            "users",
            [
                ("id", Value::Int32(3)),
                ("name", Value::from("Kayla Ramos")),
                ("email", Value::from("kayla@example.com")),
                ("password", Value::from("$2a$10$hash")),
            ],
        );

        let user = User::from_row(&row).unwrap();
        assert_eq!(user.id, UserId::new(3));
        assert_eq!(user.email, "kayla@example.com");
    }

    #[test]
    fn test_password_is_not_serialized() {
        let user = User {
            id: UserId::new(1),
            name: "A".into(),
            email: "a@example.com".into(),
            password: "secret".into(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["id"], 1);
    }
}
