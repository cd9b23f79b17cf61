//! Operator semantics for the stack machine.
//!
//! The value set is closed, so every operator is a `match` over operand
//! pairs rather than a trait dispatch. Soft failures return
//! [`Value::Undefined`](verdict_ir::Value::Undefined); hard failures return
//! an [`EvalError`](crate::EvalError).

pub(crate) mod access;
pub(crate) mod arithmetic;
pub(crate) mod compare;
pub(crate) mod dates;
pub(crate) mod logical;
pub(crate) mod membership;
