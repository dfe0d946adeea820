//! Defines the AST for SQL expressions.

use lightbnb_model::core::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column or table identifier, e.g., `users` or `users.id`.
    Identifier(Ident),

    /// `*` or `properties.*` in a select list.
    Wildcard { qualifier: Option<String> },

    /// A bound value. Never inlined: rendering emits a placeholder.
    Value(Value),

    /// A binary comparison, e.g., `email = $1` or `city LIKE $1`.
    BinaryOp(Box<BinaryOp>),

    /// `expr BETWEEN low AND high`, both bounds inclusive.
    Between {
        expr: Box<Expr>,
        low: Box<Expr>,
        high: Box<Expr>,
    },

    /// A function call, e.g., `COUNT(*)` or `AVG(rating)`.
    FunctionCall(FunctionCall),

    /// An aliased expression, e.g. `AVG(rating) AS average_rating`
    Alias { expr: Box<Expr>, alias: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub qualifier: Option<String>, // e.g., the 'users' in 'users.id'
    pub name: String,              // e.g., the 'id' in 'users.id'
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub left: Expr,
    pub op: BinaryOperator,
    pub right: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Expr>,
    pub wildcard: bool, // represents the '*' in 'COUNT(*)'
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    Eq,   // =
    GtEq, // >=
    Like, // LIKE
}

impl Expr {
    pub fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Self {
        Expr::BinaryOp(Box::new(BinaryOp { left, op, right }))
    }

    pub fn equals(self, right: Expr) -> Self {
        Expr::binary(self, BinaryOperator::Eq, right)
    }

    pub fn gt_eq(self, right: Expr) -> Self {
        Expr::binary(self, BinaryOperator::GtEq, right)
    }

    pub fn like(self, pattern: Expr) -> Self {
        Expr::binary(self, BinaryOperator::Like, pattern)
    }

    pub fn between(self, low: Expr, high: Expr) -> Self {
        Expr::Between {
            expr: Box::new(self),
            low: Box::new(low),
            high: Box::new(high),
        }
    }

    pub fn alias(self, alias: &str) -> Self {
        Expr::Alias {
            expr: Box::new(self),
            alias: alias.to_string(),
        }
    }
}
