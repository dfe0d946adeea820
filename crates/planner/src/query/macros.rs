/// Column reference from a bare or table-qualified name:
/// `col!(city)` or `col!(properties.id)`.
#[macro_export]
macro_rules! col {
    ($table:ident . $name:ident) => {
        $crate::query::qualified(stringify!($table), stringify!($name))
    };
    ($name:ident) => {
        $crate::query::ident(stringify!($name))
    };
}

#[macro_export]
macro_rules! table_ref {
    ($name:expr) => {
        $crate::query::ast::common::TableRef {
            schema: None,
            name: $name.to_string(),
        }
    };
    ($schema:expr, $name:expr) => {
        $crate::query::ast::common::TableRef {
            schema: Some($schema.to_string()),
            name: $name.to_string(),
        }
    };
}
