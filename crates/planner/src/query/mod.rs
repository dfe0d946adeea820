use crate::query::ast::expr::{Expr, FunctionCall, Ident};
use lightbnb_model::core::value::Value;

pub mod ast;
pub mod builder;
pub mod catalog;
pub mod compiled;
pub mod dialect;
pub mod macros;
pub mod renderer;

pub fn ident(name: &str) -> Expr {
    Expr::Identifier(Ident {
        qualifier: None,
        name: name.to_string(),
    })
}

pub fn qualified(table: &str, name: &str) -> Expr {
    Expr::Identifier(Ident {
        qualifier: Some(table.to_string()),
        name: name.to_string(),
    })
}

/// `*`, or `table.*` when a qualifier is given.
pub fn wildcard(qualifier: Option<&str>) -> Expr {
    Expr::Wildcard {
        qualifier: qualifier.map(String::from),
    }
}

pub fn value(val: impl Into<Value>) -> Expr {
    Expr::Value(val.into())
}

pub fn function(name: &str, args: Vec<Expr>) -> Expr {
    Expr::FunctionCall(FunctionCall {
        name: name.to_string(),
        args,
        wildcard: false,
    })
}
