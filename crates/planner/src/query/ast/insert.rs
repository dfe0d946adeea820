//! Defines the AST for an INSERT statement.

use crate::query::ast::{common::TableRef, expr::Expr};

/// A single-row INSERT with an optional `RETURNING` list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Insert {
    pub table: TableRef,
    pub columns: Vec<String>,
    pub values: Vec<Expr>,
    /// Expressions echoed back for the inserted row, e.g. `*`.
    pub returning: Vec<Expr>,
}
