//! Expression AST.
//!
//! A closed, recursive tree built once by the parser and consumed by the
//! visitors in `verdict_compile` and `verdict_fmt`. Nodes own their
//! children; nothing mutates a tree after construction.

mod operators;

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use crate::stack::ensure_sufficient_stack;
use crate::Value;

pub use operators::{ArithOp, CompareOp, Direction, DurationUnit, MembershipOp, UnaryOp};

/// Literal forms the lexer can produce.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Literal {
    /// The runtime value this literal denotes.
    pub fn to_value(&self) -> Value {
        match self {
            Literal::Int(n) => Value::Int(*n),
            Literal::Float(f) => Value::Float(*f),
            Literal::Str(s) => Value::Str(s.clone()),
            Literal::Bool(b) => Value::Bool(*b),
            Literal::Date(d) => Value::Date(*d),
            Literal::DateTime(dt) => Value::DateTime(*dt),
        }
    }
}

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Identifier(String),
    /// `base.name`
    PropertyAccess { base: Box<Expr>, name: String },
    /// `base[key]`
    BracketAccess { base: Box<Expr>, key: Box<Expr> },
    Comparison {
        op: CompareOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Arithmetic {
        op: ArithOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary { op: UnaryOp, operand: Box<Expr> },
    LogicalAnd { left: Box<Expr>, right: Box<Expr> },
    LogicalOr { left: Box<Expr>, right: Box<Expr> },
    LogicalNot { operand: Box<Expr> },
    Membership {
        op: MembershipOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    List(Vec<Expr>),
    /// Object literal; keys keep source order.
    Object(Vec<(String, Expr)>),
    /// Call by simple (`len`) or qualified (`Math.pow`) name.
    FunctionCall { name: String, args: Vec<Expr> },
    /// `1 year 2 months`
    Duration(Vec<(i64, DurationUnit)>),
    /// `3 days ago`, `2 hours from now`
    RelativeDate {
        duration: Box<Expr>,
        direction: Direction,
    },
}

impl Expr {
    /// Binding strength of the node's outermost construct.
    ///
    /// Higher number = binds less tightly. Used by the string visitor to
    /// decide where parentheses are required.
    ///
    /// - 0: literals, identifiers, lists, objects, calls
    /// - 1: postfix `.name` and `[key]`
    /// - 2: unary `-` `!`, durations, relative dates
    /// - 3: `*` `/` `%`
    /// - 4: `+` `-`
    /// - 5: `IN` `CONTAINS`
    /// - 6: comparisons
    /// - 7: `NOT`
    /// - 8: `AND`
    /// - 9: `OR`
    pub fn precedence(&self) -> u8 {
        match self {
            Expr::Literal(_)
            | Expr::Identifier(_)
            | Expr::List(_)
            | Expr::Object(_)
            | Expr::FunctionCall { .. } => 0,
            Expr::PropertyAccess { .. } | Expr::BracketAccess { .. } => 1,
            Expr::Unary { .. } | Expr::Duration(_) | Expr::RelativeDate { .. } => 2,
            Expr::Arithmetic { op, .. } => op.precedence(),
            Expr::Membership { .. } => 5,
            Expr::Comparison { .. } => 6,
            Expr::LogicalNot { .. } => 7,
            Expr::LogicalAnd { .. } => 8,
            Expr::LogicalOr { .. } => 9,
        }
    }

    /// Dotted path for identifier-rooted property chains: `a.b.c`.
    ///
    /// Returns `None` when the chain bottoms out in anything other than an
    /// identifier.
    pub fn identifier_path(&self) -> Option<String> {
        let mut names = Vec::new();
        let mut expr = self;
        loop {
            match expr {
                Expr::Identifier(name) => {
                    names.push(name.as_str());
                    break;
                }
                Expr::PropertyAccess { base, name } => {
                    names.push(name.as_str());
                    expr = base;
                }
                _ => return None,
            }
        }
        names.reverse();
        Some(names.join("."))
    }

    /// Constant value for literals and lists built only from constants.
    pub fn constant_value(&self) -> Option<Value> {
        match self {
            Expr::Literal(lit) => Some(lit.to_value()),
            Expr::List(elements) => ensure_sufficient_stack(|| {
                elements
                    .iter()
                    .map(Expr::constant_value)
                    .collect::<Option<Vec<_>>>()
                    .map(Value::List)
            }),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_value().fmt(f)
    }
}
