//! Provides a fluent builder for constructing `Insert` ASTs.

use crate::query::ast::{common::TableRef, expr::Expr, insert::Insert};

#[derive(Debug, Clone)]
pub struct InsertBuilder {
    ast: Insert,
}

impl InsertBuilder {
    pub fn new(table: TableRef) -> Self {
        Self {
            ast: Insert {
                table,
                ..Default::default()
            },
        }
    }

    /// Appends one column and the value inserted into it, keeping the two
    /// lists the same length.
    pub fn set(mut self, column: &str, value: Expr) -> Self {
        self.ast.columns.push(column.to_string());
        self.ast.values.push(value);
        self
    }

    pub fn returning(mut self, exprs: Vec<Expr>) -> Self {
        self.ast.returning = exprs;
        self
    }

    pub fn build(self) -> Insert {
        self.ast
    }
}
