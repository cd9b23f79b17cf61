//! Exhaustive AST visitor.
//!
//! `ExprVisitor` has one method per `Expr` variant and an associated
//! output type. [`walk`] dispatches a node to the matching method; the
//! visitor decides when (and whether) to recurse into children by calling
//! `walk` again. Adding an `Expr` variant breaks every visitor at compile
//! time until it handles the new node.
//!
//! # Example
//!
//! ```text
//! struct CountCalls;
//!
//! impl ExprVisitor for CountCalls {
//!     type Output = usize;
//!
//!     fn visit_function_call(&mut self, _name: &str, args: &[Expr]) -> usize {
//!         1 + args.iter().map(|a| walk(self, a)).sum::<usize>()
//!     }
//!     // ...
//! }
//! ```

use crate::stack::ensure_sufficient_stack;
use crate::{
    ArithOp, CompareOp, Direction, DurationUnit, Expr, Literal, MembershipOp, UnaryOp,
};

pub trait ExprVisitor {
    type Output;

    fn visit_literal(&mut self, literal: &Literal) -> Self::Output;
    fn visit_identifier(&mut self, name: &str) -> Self::Output;
    /// `whole` is the `PropertyAccess` node itself, for path detection.
    fn visit_property_access(&mut self, whole: &Expr, base: &Expr, name: &str) -> Self::Output;
    fn visit_bracket_access(&mut self, base: &Expr, key: &Expr) -> Self::Output;
    fn visit_comparison(&mut self, op: CompareOp, left: &Expr, right: &Expr) -> Self::Output;
    fn visit_arithmetic(&mut self, op: ArithOp, left: &Expr, right: &Expr) -> Self::Output;
    fn visit_unary(&mut self, op: UnaryOp, operand: &Expr) -> Self::Output;
    fn visit_logical_and(&mut self, left: &Expr, right: &Expr) -> Self::Output;
    fn visit_logical_or(&mut self, left: &Expr, right: &Expr) -> Self::Output;
    fn visit_logical_not(&mut self, operand: &Expr) -> Self::Output;
    fn visit_membership(&mut self, op: MembershipOp, left: &Expr, right: &Expr) -> Self::Output;
    /// `whole` is the `List` node itself, for constant folding.
    fn visit_list(&mut self, whole: &Expr, elements: &[Expr]) -> Self::Output;
    fn visit_object(&mut self, entries: &[(String, Expr)]) -> Self::Output;
    fn visit_function_call(&mut self, name: &str, args: &[Expr]) -> Self::Output;
    fn visit_duration(&mut self, parts: &[(i64, DurationUnit)]) -> Self::Output;
    fn visit_relative_date(&mut self, duration: &Expr, direction: Direction) -> Self::Output;
}

/// Dispatch `expr` to the visitor method for its variant.
///
/// Runs under the stack-growth guard, so visitors may recurse once per
/// nesting level without a depth limit of their own.
pub fn walk<V: ExprVisitor + ?Sized>(visitor: &mut V, expr: &Expr) -> V::Output {
    ensure_sufficient_stack(|| match expr {
        Expr::Literal(literal) => visitor.visit_literal(literal),
        Expr::Identifier(name) => visitor.visit_identifier(name),
        Expr::PropertyAccess { base, name } => visitor.visit_property_access(expr, base, name),
        Expr::BracketAccess { base, key } => visitor.visit_bracket_access(base, key),
        Expr::Comparison { op, left, right } => visitor.visit_comparison(*op, left, right),
        Expr::Arithmetic { op, left, right } => visitor.visit_arithmetic(*op, left, right),
        Expr::Unary { op, operand } => visitor.visit_unary(*op, operand),
        Expr::LogicalAnd { left, right } => visitor.visit_logical_and(left, right),
        Expr::LogicalOr { left, right } => visitor.visit_logical_or(left, right),
        Expr::LogicalNot { operand } => visitor.visit_logical_not(operand),
        Expr::Membership { op, left, right } => visitor.visit_membership(*op, left, right),
        Expr::List(elements) => visitor.visit_list(expr, elements),
        Expr::Object(entries) => visitor.visit_object(entries),
        Expr::FunctionCall { name, args } => visitor.visit_function_call(name, args),
        Expr::Duration(parts) => visitor.visit_duration(parts),
        Expr::RelativeDate {
            duration,
            direction,
        } => visitor.visit_relative_date(duration, *direction),
    })
}
