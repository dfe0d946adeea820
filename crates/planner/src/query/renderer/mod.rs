//! Defines the core rendering trait and context for converting AST to SQL.

use crate::query::{ast::expr::Expr, compiled::CompiledQuery, dialect::Dialect};
use lightbnb_model::core::value::Value;

pub mod expr;
pub mod insert;
pub mod select;

/// A trait for any AST node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and the parameters, and provides
/// access to the dialect for syntax-specific details. Placeholders are
/// derived from the parameter list at the moment a value is appended, so
/// `params[i]` always binds placeholder `i + 1`.
pub struct Renderer<'a> {
    pub sql: String,
    pub params: Vec<Value>,
    pub dialect: &'a dyn Dialect,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
        }
    }

    /// Consumes the renderer and returns the statement with its parameters.
    pub fn finish(self) -> CompiledQuery {
        CompiledQuery::new(self.sql, self.params)
    }

    pub fn add_param(&mut self, value: Value) {
        self.params.push(value);
        let placeholder = self.dialect.get_placeholder(self.params.len() - 1);
        self.sql.push_str(&placeholder);
    }

    pub fn push_identifier(&mut self, ident: &str) {
        let quoted = self.dialect.quote_identifier(ident);
        self.sql.push_str(&quoted);
    }

    pub fn push_list<T: Render>(&mut self, items: &[T]) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(", ");
            }
            item.render(self);
        }
    }
}

/// Emits a run of predicates under one clause keyword.
///
/// The first predicate pushed is introduced by the keyword (`WHERE`,
/// `HAVING`); every later one by `AND`. The count of predicates emitted so
/// far is the only state consulted.
pub struct PredicateChain {
    keyword: &'static str,
    emitted: usize,
}

impl PredicateChain {
    pub fn new(keyword: &'static str) -> Self {
        Self {
            keyword,
            emitted: 0,
        }
    }

    pub fn push(&mut self, predicate: &Expr, r: &mut Renderer) {
        r.sql.push(' ');
        r.sql.push_str(if self.emitted == 0 { self.keyword } else { "AND" });
        r.sql.push(' ');
        predicate.render(r);
        self.emitted += 1;
    }
}
