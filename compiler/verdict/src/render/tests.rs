#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use verdict_ir::Span;

use super::*;
use crate::{parse, Context, FunctionTable};

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

#[test]
fn test_color_mode_from_str() {
    assert_eq!("always".parse(), Ok(ColorMode::Always));
    assert_eq!("never".parse(), Ok(ColorMode::Never));
    assert_eq!(
        "sometimes".parse::<ColorMode>(),
        Err(UnknownColorMode("sometimes".to_string()))
    );
}

#[test]
fn test_parse_error_points_at_end_of_input() {
    let source = "score >";
    let err = parse(source).unwrap_err();
    assert_eq!(
        render_plain(&err, Some(source)),
        "error: expected expression, found end of input\n \
         --> 1:8\n  \
         |\n\
         1 | score >\n  \
         |        ^\n"
    );
}

#[test]
fn test_caret_covers_offending_token() {
    let source = "a AND AND b";
    let err = parse(source).unwrap_err();
    let rendered = render_plain(&err, Some(source));
    assert!(rendered.ends_with("1 | a AND AND b\n  |       ^^^\n"), "{rendered}");
}

#[test]
fn test_snippet_uses_line_of_error() {
    let source = "a AND\n(b OR";
    let err = parse(source).unwrap_err();
    let rendered = render_plain(&err, Some(source));
    assert!(rendered.contains(" --> 2:6\n"), "{rendered}");
    assert!(rendered.contains("2 | (b OR\n"), "{rendered}");
}

#[test]
fn test_without_source_only_location_is_printed() {
    let err = parse("1 +").unwrap_err();
    assert_eq!(
        render_plain(&err, None),
        "error: expected expression, found end of input\n --> 1:4\n"
    );
}

#[test]
fn test_eval_error_carries_reason_code() {
    let err = crate::evaluate_source("5 / 0", &Context::new(), &FunctionTable::with_builtins())
        .unwrap_err();
    let rendered = render_plain(&err, Some("5 / 0"));
    assert!(rendered.starts_with("error[division_by_zero]: "), "{rendered}");
    assert_eq!(rendered.lines().count(), 1);
}

#[test]
fn test_colors_wrap_header() {
    let err = parse("1 +").unwrap_err();
    let rendered = Renderer::new(ColorMode::Always, false).render(&err, Some("1 +"));
    assert!(rendered.starts_with("\x1b[1;31merror\x1b[0m: "));
}

#[test]
fn test_snippet_counts_chars_not_bytes() {
    let snippet = Snippet::locate("'é' + x", Span { start: 7, end: 8 }).unwrap();
    assert_eq!(
        snippet,
        Snippet {
            text: "'é' + x",
            offset: 6,
            width: 1,
        }
    );
}
