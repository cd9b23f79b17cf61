//! `+ - * / %` and unary minus.
//!
//! Only `+` coerces: a string on either side concatenates the other
//! side's text. Everything else is numeric, or one of the supported
//! date/duration pairings.

use verdict_ir::Value;

use super::dates;
use crate::errors::{division_by_zero, integer_overflow, modulo_by_zero, type_mismatch};
use crate::EvalResult;

const ADD_EXPECTED: &str = "numbers, a string operand, or a date and a duration";
const SUB_EXPECTED: &str = "numbers, dates, or a date and a duration";

#[inline]
fn checked_int(result: Option<i64>, operation: &str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(operation))
}

/// Float pair for mixed numeric operands; `None` unless both are numbers.
fn float_pair(a: &Value, b: &Value) -> Option<(f64, f64)> {
    Some((a.as_f64()?, b.as_f64()?))
}

pub(crate) fn add(a: &Value, b: &Value) -> EvalResult {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => checked_int(x.checked_add(*y), "add"),
        (Value::Str(s), other) => Ok(Value::Str(format!("{s}{other}"))),
        (other, Value::Str(s)) => Ok(Value::Str(format!("{other}{s}"))),
        (Value::Duration(x), Value::Duration(y)) => x
            .checked_add(*y)
            .map(Value::Duration)
            .ok_or_else(|| integer_overflow("add")),
        (Value::Date(_) | Value::DateTime(_), Value::Duration(d))
        | (Value::Duration(d), Value::Date(_) | Value::DateTime(_)) => {
            let instant = if matches!(a, Value::Duration(_)) { b } else { a };
            dates::shift(instant, d, false, "add")
        }
        _ => match float_pair(a, b) {
            Some((x, y)) => Ok(Value::Float(x + y)),
            None => Err(type_mismatch("add", ADD_EXPECTED, &[a, b])),
        },
    }
}

pub(crate) fn subtract(a: &Value, b: &Value) -> EvalResult {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => checked_int(x.checked_sub(*y), "subtract"),
        (Value::Duration(x), Value::Duration(y)) => x
            .checked_sub(*y)
            .map(Value::Duration)
            .ok_or_else(|| integer_overflow("subtract")),
        (Value::Date(_) | Value::DateTime(_), Value::Duration(d)) => {
            dates::shift(a, d, true, "subtract")
        }
        (Value::Date(_) | Value::DateTime(_), Value::Date(_) | Value::DateTime(_)) => {
            Ok(Value::Duration(dates::difference(a, b)))
        }
        _ => match float_pair(a, b) {
            Some((x, y)) => Ok(Value::Float(x - y)),
            None => Err(type_mismatch("subtract", SUB_EXPECTED, &[a, b])),
        },
    }
}

pub(crate) fn multiply(a: &Value, b: &Value) -> EvalResult {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => checked_int(x.checked_mul(*y), "multiply"),
        (Value::Duration(d), Value::Int(n)) | (Value::Int(n), Value::Duration(d)) => d
            .checked_mul(*n)
            .map(Value::Duration)
            .ok_or_else(|| integer_overflow("multiply")),
        _ => match float_pair(a, b) {
            Some((x, y)) => Ok(Value::Float(x * y)),
            None => Err(type_mismatch(
                "multiply",
                "numbers, or a duration and an integer",
                &[a, b],
            )),
        },
    }
}

/// Integer division stays integral only when exact: `6 / 3 = 2`, `7 / 2 = 3.5`.
pub(crate) fn divide(a: &Value, b: &Value) -> EvalResult {
    match (a, b) {
        (Value::Int(_), Value::Int(0)) => Err(division_by_zero()),
        (Value::Int(x), Value::Int(y)) => {
            let quotient = x.checked_div(*y).ok_or_else(|| integer_overflow("divide"))?;
            if x % y == 0 {
                Ok(Value::Int(quotient))
            } else {
                Ok(Value::Float(*x as f64 / *y as f64))
            }
        }
        _ => match float_pair(a, b) {
            Some((_, y)) if y == 0.0 => Err(division_by_zero()),
            Some((x, y)) => Ok(Value::Float(x / y)),
            None => Err(type_mismatch("divide", "numbers", &[a, b])),
        },
    }
}

/// Truncated remainder: the result takes the sign of the dividend.
pub(crate) fn modulo(a: &Value, b: &Value) -> EvalResult {
    match (a, b) {
        (Value::Int(_), Value::Int(0)) => Err(modulo_by_zero()),
        (Value::Int(x), Value::Int(y)) => checked_int(x.checked_rem(*y), "modulo"),
        _ => match float_pair(a, b) {
            Some((_, y)) if y == 0.0 => Err(modulo_by_zero()),
            Some((x, y)) => Ok(Value::Float(x % y)),
            None => Err(type_mismatch("modulo", "numbers", &[a, b])),
        },
    }
}

pub(crate) fn negate(v: &Value) -> EvalResult {
    match v {
        Value::Int(n) => checked_int(n.checked_neg(), "negate"),
        Value::Float(f) => Ok(Value::Float(-f)),
        Value::Duration(d) => d
            .checked_neg()
            .map(Value::Duration)
            .ok_or_else(|| integer_overflow("negate")),
        other => Err(type_mismatch("negate", "a number or duration", &[other])),
    }
}
