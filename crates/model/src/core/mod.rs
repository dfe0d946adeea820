pub mod identifiers;
pub mod money;
pub mod value;
