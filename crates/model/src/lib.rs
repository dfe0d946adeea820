//! Shared data model for the listing store: bind values, decoded rows,
//! domain records and the validated property-search filter.

pub mod core;
pub mod records;
pub mod search;
