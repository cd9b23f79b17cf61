//! `.name` and `[key]` on runtime values.

use verdict_ir::{MapKey, Value};

use crate::errors::invalid_key;
use crate::EvalResult;

/// `base.name`: map lookup; anything else is a soft miss.
pub(crate) fn property(base: &Value, name: &str) -> Value {
    match base {
        Value::Map(entries) => entries
            .get(&MapKey::Str(name.to_string()))
            .cloned()
            .unwrap_or(Value::Undefined),
        _ => Value::Undefined,
    }
}

/// `base[key]`.
///
/// String keys look up maps. Integer keys index lists and strings (by
/// character) or look up integer map keys. Negative or out-of-range
/// indices are soft misses; a key of any other type is an error.
pub(crate) fn bracket(base: &Value, key: &Value) -> EvalResult {
    if base.is_undefined() || key.is_undefined() {
        return Ok(Value::Undefined);
    }

    let found = match (base, key) {
        (Value::Map(entries), Value::Str(k)) => entries.get(&MapKey::Str(k.clone())).cloned(),
        (_, Value::Str(_)) => None,
        (Value::List(items), Value::Int(i)) => usize::try_from(*i)
            .ok()
            .and_then(|i| items.get(i))
            .cloned(),
        (Value::Str(s), Value::Int(i)) => usize::try_from(*i)
            .ok()
            .and_then(|i| s.chars().nth(i))
            .map(|c| Value::Str(c.to_string())),
        (Value::Map(entries), Value::Int(i)) => entries.get(&MapKey::Int(*i)).cloned(),
        (_, Value::Int(_)) => None,
        (_, other) => return Err(invalid_key(other)),
    };
    Ok(found.unwrap_or(Value::Undefined))
}
