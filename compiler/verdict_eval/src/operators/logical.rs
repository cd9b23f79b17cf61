//! Three-valued (Kleene) boolean logic over `Bool` and `Undefined`.

use verdict_ir::Value;

use crate::errors::type_mismatch;
use crate::EvalError;

/// `Some(b)` for booleans, `None` for `Undefined`.
fn truth(operation: &str, values: [&Value; 2], v: &Value) -> Result<Option<bool>, EvalError> {
    match v {
        Value::Bool(b) => Ok(Some(*b)),
        Value::Undefined => Ok(None),
        _ => Err(type_mismatch(operation, "booleans", &values)),
    }
}

pub(crate) fn and(a: &Value, b: &Value) -> Result<Value, EvalError> {
    let operands = [a, b];
    let (x, y) = (
        truth("apply AND to", operands, a)?,
        truth("apply AND to", operands, b)?,
    );
    Ok(match (x, y) {
        (Some(false), _) | (_, Some(false)) => Value::Bool(false),
        (Some(true), Some(true)) => Value::Bool(true),
        _ => Value::Undefined,
    })
}

pub(crate) fn or(a: &Value, b: &Value) -> Result<Value, EvalError> {
    let operands = [a, b];
    let (x, y) = (
        truth("apply OR to", operands, a)?,
        truth("apply OR to", operands, b)?,
    );
    Ok(match (x, y) {
        (Some(true), _) | (_, Some(true)) => Value::Bool(true),
        (Some(false), Some(false)) => Value::Bool(false),
        _ => Value::Undefined,
    })
}

/// `NOT x` and `!x`.
pub(crate) fn not(v: &Value) -> Result<Value, EvalError> {
    match v {
        Value::Bool(b) => Ok(Value::Bool(!b)),
        Value::Undefined => Ok(Value::Undefined),
        other => Err(type_mismatch("apply NOT to", "a boolean", &[other])),
    }
}

