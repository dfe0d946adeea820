//! The property-search filter model.
//!
//! [`SearchOptions`] is what a caller hands in; [`SearchOptions::validate`]
//! turns it into a [`SearchFilter`] or rejects it with [`InvalidFilter`].
//! Compilation to SQL only ever sees validated filters.

pub mod error;
pub mod filter;
pub mod options;

pub use error::InvalidFilter;
pub use filter::{DEFAULT_LIMIT, Limit, PriceRange, SearchFilter};
pub use options::SearchOptions;
