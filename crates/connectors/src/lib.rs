//! Store access for the listing service: the PostgreSQL executor, its
//! connection settings, and the repository that ties compiled statements to
//! domain records.

pub mod error;
pub mod repository;
pub mod settings;
pub mod sql;

#[cfg(test)]
pub(crate) mod memory;
