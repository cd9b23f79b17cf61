#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use verdict_ir::Value;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn test_positionals_and_flags_are_separated() {
    let options = parse_options(&args(&[
        "score > 1",
        "--strict",
        "--context={\"score\": 2}",
        "--listing",
    ]))
    .unwrap();
    assert_eq!(options.inputs, vec!["score > 1".to_string()]);
    assert!(options.strict);
    assert!(options.listing);
    assert_eq!(options.context.as_deref(), Some("{\"score\": 2}"));
}

#[test]
fn test_format_and_color_flags() {
    let options =
        parse_options(&args(&["--parens=explicit", "--spacing=compact", "--color=never"])).unwrap();
    assert_eq!(options.format.parens, Parenthesization::Explicit);
    assert_eq!(options.format.spacing, Spacing::Compact);
    assert_eq!(options.color, ColorMode::Never);
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(parse_options(&args(&["--parens=some"])).is_err());
    assert!(parse_options(&args(&["--spacing=wide"])).is_err());
    assert!(parse_options(&args(&["--color=blue"])).is_err());
    assert!(parse_options(&args(&["--now=yesterday"])).is_err());
    assert_eq!(
        parse_options(&args(&["--verbose"])),
        Err("unknown option '--verbose'".to_string())
    );
}

#[test]
fn test_now_flag_feeds_eval_options() {
    let options = parse_options(&args(&["--now=2024-01-15T10:30:00"])).unwrap();
    let expected = NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap();
    assert_eq!(options.eval_options().now, Some(expected));
    assert!(!options.eval_options().strict_variables);
}

#[test]
fn test_inline_context_loads() {
    let options = parse_options(&args(&["--context={\"a\": 1, \"b\": \"x\"}"])).unwrap();
    let ctx = options.load_context().unwrap();
    assert_eq!(ctx.get("a"), Some(&Value::Int(1)));
    assert_eq!(ctx.get("b"), Some(&Value::from("x")));
}

#[test]
fn test_missing_context_is_empty() {
    let ctx = CliOptions::default().load_context().unwrap();
    assert!(ctx.is_empty());
}

#[test]
fn test_context_must_be_object() {
    let options = parse_options(&args(&["--context=[1, 2]"])).unwrap();
    assert!(options.load_context().unwrap_err().starts_with("invalid context: "));
}

#[test]
fn test_load_text_reads_at_paths() {
    assert_eq!(load_text("a + b").unwrap(), "a + b");
    let err = load_text("@/nonexistent/verdict/rule.vd").unwrap_err();
    assert_eq!(err, "cannot find file '/nonexistent/verdict/rule.vd'");
}
