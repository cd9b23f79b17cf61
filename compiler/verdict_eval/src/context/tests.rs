#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use serde_json::json;
use verdict_ir::{MapKey, Value};

use super::{Context, ContextError};

fn nested() -> Context {
    Context::new().with(
        "user",
        Value::map([
            ("name", Value::from("ada")),
            (
                "profile",
                Value::map([("age", Value::Int(36)), ("city", Value::from("London"))]),
            ),
        ]),
    )
}

#[test]
fn resolves_plain_names() {
    let ctx = Context::new().with("score", 90i64);
    assert_eq!(ctx.resolve("score"), Value::Int(90));
    assert_eq!(ctx.resolve("missing"), Value::Undefined);
}

#[test]
fn resolves_nested_maps() {
    let ctx = nested();
    assert_eq!(ctx.resolve("user.name"), Value::from("ada"));
    assert_eq!(ctx.resolve("user.profile.age"), Value::Int(36));
    assert_eq!(ctx.resolve("user.profile.zip"), Value::Undefined);
    assert_eq!(ctx.resolve("user.name.first"), Value::Undefined);
}

#[test]
fn resolves_flat_dotted_keys() {
    let ctx = Context::new().with("user.name", "ada");
    assert_eq!(ctx.resolve("user.name"), Value::from("ada"));
    assert_eq!(ctx.resolve("user"), Value::Undefined);
}

#[test]
fn longest_flat_prefix_then_walk() {
    let ctx = Context::new()
        .with("user.profile", Value::map([("age", Value::Int(30))]))
        .with("user", Value::map([("profile", Value::map([("age", Value::Int(99))]))]));
    assert_eq!(ctx.resolve("user.profile.age"), Value::Int(30));
}

#[test]
fn shorter_prefix_is_tried_when_longer_walk_misses() {
    let ctx = Context::from_json(&json!({
        "a": {"b": {"c": 1}},
        "a.b": {"x": 2},
    }))
    .unwrap();
    assert_eq!(ctx.resolve("a.b.c"), Value::Int(1));
    assert_eq!(ctx.resolve("a.b.x"), Value::Int(2));
    assert_eq!(ctx.resolve("a.b.y"), Value::Undefined);
}

#[test]
fn integer_segments_match_integer_keys() {
    let mut map = std::collections::BTreeMap::new();
    map.insert(MapKey::Int(7), Value::from("seven"));
    let ctx = Context::new().with("codes", Value::Map(map));
    assert_eq!(ctx.resolve("codes.7"), Value::from("seven"));
    assert_eq!(ctx.resolve("codes.8"), Value::Undefined);
}

#[test]
fn from_json_object() {
    let ctx = Context::from_json(&json!({
        "score": 90,
        "tags": ["a", "b"],
        "joined": {"$date": "2024-01-15"},
        "user": {"age": 30}
    }))
    .unwrap();
    assert_eq!(ctx.len(), 4);
    assert_eq!(ctx.resolve("user.age"), Value::Int(30));
    assert!(matches!(ctx.get("joined"), Some(Value::Date(_))));
}

#[test]
fn from_json_rejects_non_objects() {
    let err = Context::from_json(&json!([1, 2])).unwrap_err();
    assert!(matches!(err, ContextError::NotAnObject("an array")));
    assert_eq!(err.to_string(), "context must be a JSON object, found an array");
}

#[test]
fn from_json_str_reports_syntax_errors() {
    assert!(matches!(
        Context::from_json_str("{not json"),
        Err(ContextError::Json(_))
    ));
}

#[test]
fn collects_from_pairs() {
    let ctx: Context = [("a", 1i64), ("b", 2i64)].into_iter().collect();
    assert_eq!(ctx.resolve("b"), Value::Int(2));
}
