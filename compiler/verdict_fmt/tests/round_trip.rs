//! Property-based round-trip tests for the string visitor.
//!
//! Generates random expression trees and checks that formatting them with
//! any re-parseable configuration and parsing the result gives back the
//! same tree.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use chrono::NaiveDate;
use proptest::prelude::*;
use verdict_fmt::{format_expr, FormatConfig, Parenthesization, Spacing};
use verdict_ir::{
    ArithOp, CompareOp, Direction, DurationUnit, Expr, Literal, MembershipOp, UnaryOp,
};

// -- Strategies --

/// Identifiers that are neither keywords nor duration words.
fn identifier() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["score", "status", "user", "x", "y", "_tmp", "Amount"])
        .prop_map(String::from)
}

fn function_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["len", "max", "lower", "Math.pow", "a.b.c"]).prop_map(String::from)
}

fn object_key() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["name", "two words", "in", "x_1", "", "k\"q", "Ünï"])
        .prop_map(String::from)
}

fn literal() -> impl Strategy<Value = Literal> {
    prop_oneof![
        (0i64..1_000_000).prop_map(Literal::Int),
        (0i64..100_000).prop_map(|n| Literal::Float(n as f64 / 100.0)),
        "[ -~]{0,8}".prop_map(Literal::Str),
        any::<bool>().prop_map(Literal::Bool),
        (1990i32..2100, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| {
            Literal::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
        }),
        (1990i32..2100, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60).prop_map(
            |(y, mo, d, h, mi, s)| {
                let date = NaiveDate::from_ymd_opt(y, mo, d).unwrap();
                Literal::DateTime(date.and_hms_opt(h, mi, s).unwrap())
            }
        ),
    ]
}

fn duration() -> impl Strategy<Value = Expr> {
    prop::collection::vec(
        (0i64..1000, prop::sample::select(DurationUnit::ALL.to_vec())),
        1..=3,
    )
    .prop_map(Expr::Duration)
}

fn leaf() -> impl Strategy<Value = Expr> {
    prop_oneof![
        literal().prop_map(Expr::Literal),
        identifier().prop_map(Expr::Identifier),
        duration(),
        (duration(), prop::sample::select(vec![Direction::Ago, Direction::FromNow])).prop_map(
            |(duration, direction)| Expr::RelativeDate {
                duration: Box::new(duration),
                direction,
            }
        ),
    ]
}

fn compare_op() -> impl Strategy<Value = CompareOp> {
    prop::sample::select(vec![
        CompareOp::Eq,
        CompareOp::NotEq,
        CompareOp::StrictEq,
        CompareOp::StrictNotEq,
        CompareOp::Gt,
        CompareOp::GtEq,
        CompareOp::Lt,
        CompareOp::LtEq,
    ])
}

fn arith_op() -> impl Strategy<Value = ArithOp> {
    prop::sample::select(vec![
        ArithOp::Add,
        ArithOp::Sub,
        ArithOp::Mul,
        ArithOp::Div,
        ArithOp::Mod,
    ])
}

/// Numeric literals are kept out of postfix position so `1.x` never has
/// to be told apart from a float.
fn postfix_base(inner: impl Strategy<Value = Expr>) -> impl Strategy<Value = Expr> {
    inner.prop_filter("numeric postfix base", |e| {
        !matches!(e, Expr::Literal(Literal::Int(_) | Literal::Float(_)))
    })
}

fn expr() -> impl Strategy<Value = Expr> {
    leaf().prop_recursive(4, 48, 4, |inner| {
        let b = || inner.clone().prop_map(Box::new);
        prop_oneof![
            (postfix_base(inner.clone()), identifier()).prop_map(|(base, name)| {
                Expr::PropertyAccess {
                    base: Box::new(base),
                    name,
                }
            }),
            (postfix_base(inner.clone()), b())
                .prop_map(|(base, key)| Expr::BracketAccess {
                    base: Box::new(base),
                    key
                }),
            (compare_op(), b(), b()).prop_map(|(op, left, right)| Expr::Comparison {
                op,
                left,
                right
            }),
            (arith_op(), b(), b()).prop_map(|(op, left, right)| Expr::Arithmetic {
                op,
                left,
                right
            }),
            (prop::sample::select(vec![Some(UnaryOp::Minus), Some(UnaryOp::Bang), None]), b())
                .prop_map(|(op, operand)| match op {
                    Some(op) => Expr::Unary { op, operand },
                    None => Expr::LogicalNot { operand },
                }),
            (any::<bool>(), b(), b()).prop_map(|(is_and, left, right)| if is_and {
                Expr::LogicalAnd { left, right }
            } else {
                Expr::LogicalOr { left, right }
            }),
            (
                prop::sample::select(vec![MembershipOp::In, MembershipOp::Contains]),
                b(),
                b()
            )
                .prop_map(|(op, left, right)| Expr::Membership { op, left, right }),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Expr::List),
            prop::collection::vec((object_key(), inner.clone()), 0..3).prop_map(Expr::Object),
            (function_name(), prop::collection::vec(inner.clone(), 0..3))
                .prop_map(|(name, args)| Expr::FunctionCall { name, args }),
        ]
    })
}

fn reparseable_config() -> impl Strategy<Value = FormatConfig> {
    (
        prop::sample::select(vec![Parenthesization::Minimal, Parenthesization::Explicit]),
        prop::sample::select(vec![Spacing::Normal, Spacing::Compact, Spacing::Verbose]),
    )
        .prop_map(|(parens, spacing)| FormatConfig { parens, spacing })
}

fn reparse(text: &str) -> Expr {
    let tokens = verdict_lexer::tokenize(text)
        .unwrap_or_else(|e| panic!("formatted text {text:?} failed to lex: {e}"));
    verdict_parse::parse(&tokens)
        .unwrap_or_else(|e| panic!("formatted text {text:?} failed to parse: {e}"))
}

// -- Properties --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn formatted_tree_reparses_identically(tree in expr(), config in reparseable_config()) {
        let text = format_expr(&tree, &config);
        prop_assert_eq!(reparse(&text), tree, "formatted as {:?}", text);
    }

    #[test]
    fn formatting_is_idempotent(tree in expr(), config in reparseable_config()) {
        let once = format_expr(&tree, &config);
        let twice = format_expr(&reparse(&once), &config);
        prop_assert_eq!(once, twice);
    }
}
