//! The reference scenarios, driven through the public facade.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use serde_json::json;
use verdict::{
    compile, decompile, parse, Context, Engine, Error, EvalError, FunctionTable, ReasonCode, Value,
};

#[test]
fn score_predicate_compiles_and_holds() {
    let program = compile("score > 85").unwrap();
    assert_eq!(
        program.to_json(),
        json!([["load", "score"], ["lit", 85], ["compare", "GT"]])
    );

    let ctx = Context::from_json(&json!({"score": 90})).unwrap();
    let value = Engine::new().evaluate(&program, &ctx).unwrap();
    assert_eq!(value, Value::Bool(true));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let value = Engine::new().evaluate_source("2 + 3 * 4", &Context::new()).unwrap();
    assert_eq!(value, Value::Int(14));
}

#[test]
fn plus_concatenates_when_either_side_is_a_string() {
    let value = Engine::new().evaluate_source("'a' + 5", &Context::new()).unwrap();
    assert_eq!(value, Value::from("a5"));
}

#[test]
fn division_by_zero_is_reported() {
    let err = Engine::new().evaluate_source("5 / 0", &Context::new()).unwrap_err();
    let Error::Eval(eval_err) = err else {
        panic!("expected an evaluation error, got {err:?}");
    };
    assert_eq!(eval_err.reason(), Some(ReasonCode::DivisionByZero));
    assert_eq!(ReasonCode::DivisionByZero.as_str(), "division_by_zero");
}

#[test]
fn missing_variable_compares_to_undefined() {
    let value = Engine::new()
        .evaluate_source("missing_var > 5", &Context::new())
        .unwrap();
    assert_eq!(value, Value::Undefined);
}

#[test]
fn caller_function_overrides_builtin() {
    let functions = FunctionTable::builder()
        .function("len", 1, |_args: &[Value], _ctx: &Context| Ok(Value::Int(-1)))
        .with_builtins()
        .build();
    let engine = Engine::new().with_functions(functions);

    let ctx = Context::new().with("name", "hello");

    let value = engine.evaluate_source("len(name)", &ctx).unwrap();
    assert_eq!(value, Value::Int(-1));

    let builtin = Engine::new().evaluate_source("len(name)", &ctx).unwrap();
    assert_eq!(builtin, Value::Int(5));
}

#[test]
fn arity_mismatch_names_both_counts() {
    let err = Engine::new()
        .evaluate_source("len(1, 2, 3)", &Context::new())
        .unwrap_err();
    let Error::Eval(EvalError::Evaluation(e)) = err else {
        panic!("expected an evaluation error, got {err:?}");
    };
    assert_eq!(e.reason, ReasonCode::ArityMismatch);
    assert_eq!(e.message, "function 'len' expects 1 argument, got 3");
}

#[test]
fn decompiled_source_parses_to_same_tree() {
    let sources = [
        "score > 85 AND status IN ['active', 'trial']",
        "NOT (a OR b) AND c",
        "(1 + 2) * -x.y[0]",
        "created > 3 days ago",
        "Math.pow(2, 10) >= 1000",
    ];
    for source in sources {
        let tree = parse(source).unwrap();
        let text = decompile(&tree);
        assert_eq!(parse(&text).unwrap(), tree, "{source:?} -> {text:?}");
    }
}
