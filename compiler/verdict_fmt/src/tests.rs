#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use verdict_ir::{ArithOp, CompareOp, Direction, DurationUnit, Expr, Literal};

use super::{decompile, format_expr, FormatConfig, Parenthesization, Spacing};

fn parse(source: &str) -> Expr {
    let tokens = verdict_lexer::tokenize(source).expect("lex error");
    verdict_parse::parse(&tokens).expect("parse error")
}

fn fmt(source: &str) -> String {
    decompile(&parse(source))
}

fn fmt_with(source: &str, config: FormatConfig) -> String {
    format_expr(&parse(source), &config)
}

fn ident(name: &str) -> Box<Expr> {
    Box::new(Expr::Identifier(name.into()))
}

fn int(n: i64) -> Box<Expr> {
    Box::new(Expr::Literal(Literal::Int(n)))
}

#[test]
fn canonical_operator_spellings() {
    assert_eq!(fmt("a && b || !c"), "a AND b OR !c");
    assert_eq!(fmt("a and not b"), "a AND NOT b");
    assert_eq!(fmt("x = 1"), "x == 1");
    assert_eq!(fmt("x <> 1"), "x != 1");
    assert_eq!(fmt("tags contains 'vip'"), "tags CONTAINS \"vip\"");
}

#[test]
fn minimal_parens_follow_precedence() {
    assert_eq!(fmt("(a + b) * c"), "(a + b) * c");
    assert_eq!(fmt("a + (b * c)"), "a + b * c");
    assert_eq!(fmt("(a - b) - c"), "a - b - c");
    assert_eq!(fmt("a - (b - c)"), "a - (b - c)");
    assert_eq!(fmt("(a OR b) AND c"), "(a OR b) AND c");
    assert_eq!(fmt("NOT (a AND b)"), "NOT (a AND b)");
    assert_eq!(fmt("NOT (a > 1)"), "NOT a > 1");
    assert_eq!(fmt("(NOT a) == b"), "(NOT a) == b");
    assert_eq!(fmt("-(a + b)"), "-(a + b)");
    assert_eq!(fmt("(-a).b"), "(-a).b");
}

#[test]
fn not_in_prints_as_negated_membership() {
    assert_eq!(fmt("role NOT IN ['guest']"), "NOT role IN [\"guest\"]");
    assert_eq!(parse(&fmt("role NOT IN ['guest']")), parse("role NOT IN ['guest']"));
}

#[test]
fn explicit_parens_wrap_compound_operands() {
    let config = FormatConfig::default().with_parens(Parenthesization::Explicit);
    assert_eq!(fmt_with("a + b * c", config), "a + (b * c)");
    assert_eq!(fmt_with("a > 1 AND b", config), "(a > 1) AND b");
    assert_eq!(fmt_with("x.y + 1", config), "x.y + 1");
    assert_eq!(fmt_with("3 days ago", config), "3 days ago");
}

#[test]
fn no_parens_mode_drops_grouping() {
    let config = FormatConfig::default().with_parens(Parenthesization::None);
    assert_eq!(fmt_with("(a + b) * c", config), "a + b * c");
}

#[test]
fn spacing_modes() {
    let source = "f(a, [1, 2], {k: 1}) + x[0]";
    assert_eq!(fmt(source), "f(a, [1, 2], {k: 1}) + x[0]");
    assert_eq!(
        fmt_with(source, FormatConfig::default().with_spacing(Spacing::Compact)),
        "f(a,[1,2],{k:1})+x[0]"
    );
    assert_eq!(
        fmt_with(source, FormatConfig::default().with_spacing(Spacing::Verbose)),
        "f( a, [ 1, 2 ], { k: 1 } ) + x[ 0 ]"
    );
}

#[test]
fn compact_keeps_keyword_spaces() {
    let config = FormatConfig::default().with_spacing(Spacing::Compact);
    assert_eq!(fmt_with("a > 1 AND b IN c", config), "a>1 AND b IN c");
}

#[test]
fn empty_containers() {
    assert_eq!(fmt("[]"), "[]");
    assert_eq!(fmt("{}"), "{}");
    assert_eq!(
        fmt_with("now()", FormatConfig::default().with_spacing(Spacing::Verbose)),
        "now()"
    );
}

#[test]
fn literals() {
    assert_eq!(fmt("3.0"), "3.0");
    assert_eq!(fmt("2.5"), "2.5");
    assert_eq!(fmt(r#"'it\'s "x"'"#), r#""it's \"x\"""#);
    assert_eq!(fmt("TRUE"), "true");
    assert_eq!(fmt("#2024-01-15#"), "#2024-01-15#");
    assert_eq!(fmt("#2024-01-15 10:30#"), "#2024-01-15T10:30:00#");
}

#[test]
fn object_keys_quoted_when_needed() {
    assert_eq!(
        fmt(r#"{name: 1, "two words": 2, "in": 3}"#),
        r#"{name: 1, "two words": 2, "in": 3}"#
    );
}

#[test]
fn durations_and_relative_dates() {
    assert_eq!(fmt("1 YEAR 2 month"), "1 year 2 months");
    assert_eq!(fmt("3 days ago"), "3 days ago");
    assert_eq!(fmt("2 hours FROM NOW"), "2 hours from now");
    assert_eq!(fmt("created < 30 days ago"), "created < 30 days ago");
}

#[test]
fn qualified_calls_and_paths() {
    assert_eq!(fmt("Math.pow(x, 2)"), "Math.pow(x, 2)");
    assert_eq!(fmt("user.profile.age >= 18"), "user.profile.age >= 18");
    assert_eq!(fmt("a.b[\"c\"].d"), "a.b[\"c\"].d");
}

#[test]
fn hand_built_trees() {
    let expr = Expr::Arithmetic {
        op: ArithOp::Mul,
        left: Box::new(Expr::Arithmetic {
            op: ArithOp::Add,
            left: int(1),
            right: int(2),
        }),
        right: ident("x"),
    };
    assert_eq!(decompile(&expr), "(1 + 2) * x");

    let expr = Expr::Comparison {
        op: CompareOp::StrictNotEq,
        left: ident("a"),
        right: Box::new(Expr::RelativeDate {
            duration: Box::new(Expr::Duration(vec![(1, DurationUnit::Weeks)])),
            direction: Direction::FromNow,
        }),
    };
    assert_eq!(decompile(&expr), "a !== 1 week from now");
}

#[test]
fn output_reparses_to_same_tree() {
    let sources = [
        "score > 85 AND status == 'active'",
        "a - (b - c) * -d % 2",
        "NOT NOT x",
        "[a, b] == c",
        "x IN [1, 2] OR y CONTAINS 'z' AND NOT w",
        "len(items) * 2 >= max(a, b) / 3",
        "(1 day).x + 1 day 2 hours",
        "{\"a b\": [1, {c: d}]}[\"a b\"][1].c",
        "-3 days ago < now()",
    ];
    for source in sources {
        let tree = parse(source);
        for parens in [Parenthesization::Minimal, Parenthesization::Explicit] {
            for spacing in [Spacing::Normal, Spacing::Compact, Spacing::Verbose] {
                let config = FormatConfig { parens, spacing };
                let text = format_expr(&tree, &config);
                assert_eq!(parse(&text), tree, "source {source:?} formatted as {text:?}");
            }
        }
    }
}

#[test]
fn config_from_str() {
    assert_eq!("explicit".parse(), Ok(Parenthesization::Explicit));
    assert_eq!("compact".parse(), Ok(Spacing::Compact));
    assert!("loose".parse::<Spacing>().is_err());
}
