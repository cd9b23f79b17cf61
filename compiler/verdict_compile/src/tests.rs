use pretty_assertions::assert_eq;
use serde_json::json;
use verdict_ir::Instruction as I;

use super::*;

fn compile(source: &str) -> Program {
    let tokens = match verdict_lexer::tokenize(source) {
        Ok(tokens) => tokens,
        Err(err) => panic!("lex error: {err}"),
    };
    match verdict_parse::parse(&tokens) {
        Ok(expr) => lower(&expr),
        Err(err) => panic!("parse error: {err}"),
    }
}

fn instructions(source: &str) -> Vec<Instruction> {
    compile(source).instructions().to_vec()
}

#[test]
fn test_comparison_wire_format() {
    assert_eq!(
        compile("score > 85").to_json(),
        json!([["load", "score"], ["lit", 85], ["compare", "GT"]])
    );
}

#[test]
fn test_post_order_arithmetic() {
    assert_eq!(
        instructions("2 + 3 * 4"),
        vec![
            I::Lit(Value::Int(2)),
            I::Lit(Value::Int(3)),
            I::Lit(Value::Int(4)),
            I::Multiply,
            I::Add,
        ]
    );
}

#[test]
fn test_every_arithmetic_opcode() {
    assert_eq!(
        instructions("a - b / c % d"),
        vec![
            I::Load("a".into()),
            I::Load("b".into()),
            I::Load("c".into()),
            I::Divide,
            I::Load("d".into()),
            I::Modulo,
            I::Subtract,
        ]
    );
}

#[test]
fn test_identifier_path_folds_into_load() {
    assert_eq!(instructions("user.address.city"), vec![I::Load("user.address.city".into())]);
}

#[test]
fn test_property_on_computed_base_uses_access() {
    assert_eq!(
        instructions("orders[0].total"),
        vec![
            I::Load("orders".into()),
            I::Lit(Value::Int(0)),
            I::BracketAccess,
            I::Access("total".into()),
        ]
    );
}

#[test]
fn test_logic_and_unary() {
    assert_eq!(
        instructions("!a AND NOT b OR -c"),
        vec![
            I::Load("a".into()),
            I::UnaryBang,
            I::Load("b".into()),
            I::Not,
            I::And,
            I::Load("c".into()),
            I::UnaryMinus,
            I::Or,
        ]
    );
}

#[test]
fn test_membership_opcodes() {
    assert_eq!(
        instructions("x IN xs"),
        vec![I::Load("x".into()), I::Load("xs".into()), I::In]
    );
    assert_eq!(
        instructions("xs CONTAINS x"),
        vec![I::Load("xs".into()), I::Load("x".into()), I::Contains]
    );
}

#[test]
fn test_constant_list_is_single_literal() {
    assert_eq!(
        instructions("[1, 'a', [true]]"),
        vec![I::Lit(Value::List(vec![
            Value::Int(1),
            Value::Str("a".into()),
            Value::List(vec![Value::Bool(true)]),
        ]))]
    );
}

#[test]
fn test_dynamic_list_uses_array() {
    assert_eq!(
        instructions("[1, x]"),
        vec![I::Lit(Value::Int(1)), I::Load("x".into()), I::Array(2)]
    );
}

#[test]
fn test_object_lowering() {
    assert_eq!(
        instructions("{a: 1, b: x}"),
        vec![
            I::Lit(Value::Str("a".into())),
            I::Lit(Value::Int(1)),
            I::Lit(Value::Str("b".into())),
            I::Load("x".into()),
            I::Object(2),
        ]
    );
}

#[test]
fn test_call_lowering() {
    assert_eq!(
        instructions("Math.pow(x, 2)"),
        vec![
            I::Load("x".into()),
            I::Lit(Value::Int(2)),
            I::Call {
                name: "Math.pow".into(),
                argc: 2,
            },
        ]
    );
}

#[test]
fn test_duration_and_relative_date() {
    assert_eq!(
        compile("1 day 2 hours ago").to_json(),
        json!([["duration", [[1, "days"], [2, "hours"]]], ["relative_date", "ago"]])
    );
}

#[test]
fn test_lowering_is_deterministic() {
    let source = "a.b > 3 AND len(c) IN [1, 2, d] OR {k: 1 week}['k'] == 7 days";
    assert_eq!(compile(source), compile(source));
}

#[test]
fn test_wire_round_trip_of_compiled_program() {
    let program = compile("created < 3 days ago AND tags CONTAINS 'vip' AND score / 2 >= 4.5");
    assert_eq!(Program::from_json(&program.to_json()), Ok(program));
}
