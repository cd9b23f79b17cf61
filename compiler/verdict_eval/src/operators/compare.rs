//! Comparison operators. These never fail: pairs that cannot be compared
//! yield `Undefined`.

use std::cmp::Ordering;

use verdict_ir::{CompareOp, Value};

pub(crate) fn compare(op: CompareOp, a: &Value, b: &Value) -> Value {
    if a.is_undefined() || b.is_undefined() {
        return Value::Undefined;
    }

    match op {
        CompareOp::StrictEq => Value::Bool(strict_eq(a, b)),
        CompareOp::StrictNotEq => Value::Bool(!strict_eq(a, b)),
        CompareOp::Eq => loose_eq(a, b).map_or(Value::Undefined, Value::Bool),
        CompareOp::NotEq => loose_eq(a, b).map_or(Value::Undefined, |eq| Value::Bool(!eq)),
        CompareOp::Gt => ordered(a, b, Ordering::is_gt),
        CompareOp::GtEq => ordered(a, b, Ordering::is_ge),
        CompareOp::Lt => ordered(a, b, Ordering::is_lt),
        CompareOp::LtEq => ordered(a, b, Ordering::is_le),
    }
}

/// Same kind and same value, with no numeric promotion.
fn strict_eq(a: &Value, b: &Value) -> bool {
    a.kind() == b.kind() && a == b
}

/// `None` when the kinds cannot be compared.
fn loose_eq(a: &Value, b: &Value) -> Option<bool> {
    let numeric = a.as_f64().is_some() && b.as_f64().is_some();
    (numeric || a.kind() == b.kind()).then(|| a.loose_eq(b))
}

fn ordered(a: &Value, b: &Value, test: fn(Ordering) -> bool) -> Value {
    ordering(a, b).map_or(Value::Undefined, |ord| Value::Bool(test(ord)))
}

fn ordering(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => Some(x.cmp(y)),
        (Value::Str(x), Value::Str(y)) => Some(x.cmp(y)),
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        (Value::Date(x), Value::Date(y)) => Some(x.cmp(y)),
        (Value::DateTime(x), Value::DateTime(y)) => Some(x.cmp(y)),
        (Value::Duration(x), Value::Duration(y)) => Some(x.approx_millis().cmp(&y.approx_millis())),
        _ => {
            let (x, y) = (a.as_f64()?, b.as_f64()?);
            x.partial_cmp(&y)
        }
    }
}
