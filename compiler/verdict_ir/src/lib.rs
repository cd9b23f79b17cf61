//! Shared data model for the Verdict expression engine.
//!
//! Every stage of the pipeline (lexer, parser, compiler, string visitor,
//! evaluator) speaks in terms of the types defined here:
//!
//! - [`Span`], [`Token`], [`TokenKind`]: lexer output
//! - [`Expr`] and its operator enums: parser output
//! - [`Instruction`] and [`Program`]: compiler output and evaluator input
//! - [`Value`]: runtime values and literal operands
//! - [`ExprVisitor`]: exhaustive AST traversal shared by the visitors
//!
//! All types are plain owned data, `Send + Sync`, and immutable once built.

mod ast;
mod instruction;
mod span;
pub mod stack;
mod token;
mod value;
mod visitor;

pub use ast::{
    ArithOp, CompareOp, Direction, DurationUnit, Expr, Literal, MembershipOp, UnaryOp,
};
pub use instruction::{Instruction, Opcode, Program, WireError};
pub use span::Span;
pub use token::{Token, TokenKind};
pub use value::{parse_datetime_text, Duration, MapKey, Value, ValueKind};
pub use visitor::{walk, ExprVisitor};
