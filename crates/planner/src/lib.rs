//! Compiles listing-store reads and writes into parameterized PostgreSQL
//! statements.
//!
//! Statements are assembled as a small SQL AST and rendered by a
//! [`query::renderer::Renderer`], which allocates `$n` placeholders in
//! emission order. The entry points live in [`query::catalog`].

pub mod query;

pub use query::{catalog, compiled::CompiledQuery};
