//! `IN` and `CONTAINS`. Both reduce to "does `collection` hold `item`".

use verdict_ir::{MapKey, Value};

use crate::errors::type_mismatch;
use crate::EvalResult;

pub(crate) fn contains(collection: &Value, item: &Value) -> EvalResult {
    if collection.is_undefined() || item.is_undefined() {
        return Ok(Value::Undefined);
    }

    match collection {
        Value::List(items) => Ok(Value::Bool(items.iter().any(|x| x.loose_eq(item)))),
        Value::Str(haystack) => match item {
            Value::Str(needle) => Ok(Value::Bool(haystack.contains(needle.as_str()))),
            other => Err(type_mismatch(
                "search a string for",
                "a string item",
                &[other],
            )),
        },
        Value::Map(entries) => {
            let key = match item {
                Value::Str(s) => MapKey::Str(s.clone()),
                Value::Int(n) => MapKey::Int(*n),
                other => {
                    return Err(type_mismatch(
                        "look up a map key with",
                        "a string or integer key",
                        &[other],
                    ))
                }
            };
            Ok(Value::Bool(entries.contains_key(&key)))
        }
        other => Err(type_mismatch(
            "test membership in",
            "a list, string, or map",
            &[other],
        )),
    }
}
