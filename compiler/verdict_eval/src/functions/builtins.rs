//! Built-in functions shipped with the engine.

use chrono::Utc;
use verdict_ir::Value;

use crate::Context;

type Builtin = fn(&[Value], &Context) -> Result<Value, String>;

/// `(name, arity, implementation)`.
pub(super) const BUILTINS: &[(&str, usize, Builtin)] = &[
    ("len", 1, len),
    ("abs", 1, abs),
    ("min", 2, min),
    ("max", 2, max),
    ("round", 1, round),
    ("floor", 1, floor),
    ("ceil", 1, ceil),
    ("lower", 1, lower),
    ("upper", 1, upper),
    ("trim", 1, trim),
    ("starts_with", 2, starts_with),
    ("ends_with", 2, ends_with),
    ("now", 0, now),
    ("today", 0, today),
    ("Math.pow", 2, pow),
    ("Math.sqrt", 1, sqrt),
];

fn expected(function: &str, what: &str, got: &Value) -> String {
    format!("{function} expects {what}, got {}", got.type_name())
}

fn len(args: &[Value], _: &Context) -> Result<Value, String> {
    let n = match &args[0] {
        Value::Str(s) => s.chars().count(),
        Value::List(items) => items.len(),
        Value::Map(entries) => entries.len(),
        Value::Undefined => return Ok(Value::Undefined),
        other => return Err(expected("len", "a string, list, or map", other)),
    };
    i64::try_from(n)
        .map(Value::Int)
        .map_err(|_| "length out of range".to_string())
}

fn abs(args: &[Value], _: &Context) -> Result<Value, String> {
    match &args[0] {
        Value::Int(n) => n
            .checked_abs()
            .map(Value::Int)
            .ok_or_else(|| "integer overflow in abs".to_string()),
        Value::Float(f) => Ok(Value::Float(f.abs())),
        Value::Undefined => Ok(Value::Undefined),
        other => Err(expected("abs", "a number", other)),
    }
}

fn pick(name: &str, args: &[Value], take_left: fn(f64, f64) -> bool) -> Result<Value, String> {
    match (&args[0], &args[1]) {
        (Value::Undefined, _) | (_, Value::Undefined) => Ok(Value::Undefined),
        (a, b) => {
            let (Some(x), Some(y)) = (a.as_f64(), b.as_f64()) else {
                let culprit = if a.as_f64().is_none() { a } else { b };
                return Err(expected(name, "numbers", culprit));
            };
            Ok(if take_left(x, y) { a.clone() } else { b.clone() })
        }
    }
}

fn min(args: &[Value], _: &Context) -> Result<Value, String> {
    pick("min", args, |x, y| x <= y)
}

fn max(args: &[Value], _: &Context) -> Result<Value, String> {
    pick("max", args, |x, y| x >= y)
}

fn to_int(function: &str, args: &[Value], op: fn(f64) -> f64) -> Result<Value, String> {
    match &args[0] {
        Value::Int(n) => Ok(Value::Int(*n)),
        Value::Float(f) => {
            let rounded = op(*f);
            if rounded.is_finite() && rounded >= i64::MIN as f64 && rounded < i64::MAX as f64 {
                Ok(Value::Int(rounded as i64))
            } else {
                Err(format!("{function} result {rounded} is out of integer range"))
            }
        }
        Value::Undefined => Ok(Value::Undefined),
        other => Err(expected(function, "a number", other)),
    }
}

fn round(args: &[Value], _: &Context) -> Result<Value, String> {
    to_int("round", args, f64::round)
}

fn floor(args: &[Value], _: &Context) -> Result<Value, String> {
    to_int("floor", args, f64::floor)
}

fn ceil(args: &[Value], _: &Context) -> Result<Value, String> {
    to_int("ceil", args, f64::ceil)
}

fn map_str(function: &str, args: &[Value], f: fn(&str) -> String) -> Result<Value, String> {
    match &args[0] {
        Value::Str(s) => Ok(Value::Str(f(s))),
        Value::Undefined => Ok(Value::Undefined),
        other => Err(expected(function, "a string", other)),
    }
}

fn lower(args: &[Value], _: &Context) -> Result<Value, String> {
    map_str("lower", args, str::to_lowercase)
}

fn upper(args: &[Value], _: &Context) -> Result<Value, String> {
    map_str("upper", args, str::to_uppercase)
}

fn trim(args: &[Value], _: &Context) -> Result<Value, String> {
    map_str("trim", args, |s| s.trim().to_string())
}

fn test_str(function: &str, args: &[Value], f: fn(&str, &str) -> bool) -> Result<Value, String> {
    match (&args[0], &args[1]) {
        (Value::Str(s), Value::Str(affix)) => Ok(Value::Bool(f(s, affix))),
        (Value::Undefined, _) | (_, Value::Undefined) => Ok(Value::Undefined),
        (Value::Str(_), other) | (other, _) => Err(expected(function, "strings", other)),
    }
}

fn starts_with(args: &[Value], _: &Context) -> Result<Value, String> {
    test_str("starts_with", args, |s, affix| s.starts_with(affix))
}

fn ends_with(args: &[Value], _: &Context) -> Result<Value, String> {
    test_str("ends_with", args, |s, affix| s.ends_with(affix))
}

fn now(_: &[Value], _: &Context) -> Result<Value, String> {
    Ok(Value::DateTime(Utc::now().naive_utc()))
}

fn today(_: &[Value], _: &Context) -> Result<Value, String> {
    Ok(Value::Date(Utc::now().date_naive()))
}

fn pow(args: &[Value], _: &Context) -> Result<Value, String> {
    match (&args[0], &args[1]) {
        (Value::Int(base), Value::Int(exp)) if *exp >= 0 => {
            let exp = u32::try_from(*exp).map_err(|_| "exponent too large".to_string())?;
            base.checked_pow(exp)
                .map(Value::Int)
                .ok_or_else(|| "integer overflow in Math.pow".to_string())
        }
        (Value::Undefined, _) | (_, Value::Undefined) => Ok(Value::Undefined),
        (a, b) => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => Ok(Value::Float(x.powf(y))),
            (None, _) => Err(expected("Math.pow", "numbers", a)),
            (_, None) => Err(expected("Math.pow", "numbers", b)),
        },
    }
}

fn sqrt(args: &[Value], _: &Context) -> Result<Value, String> {
    match &args[0] {
        Value::Undefined => Ok(Value::Undefined),
        other => {
            let x = other
                .as_f64()
                .ok_or_else(|| expected("Math.sqrt", "a number", other))?;
            if x < 0.0 {
                return Err(format!("square root of negative number {other}"));
            }
            Ok(Value::Float(x.sqrt()))
        }
    }
}
