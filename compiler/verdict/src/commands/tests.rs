#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::PathBuf;

use pretty_assertions::assert_eq;

use super::batch::parse_contexts;
use super::*;

fn opts(list: &[&str]) -> CliOptions {
    let args: Vec<String> = list.iter().map(ToString::to_string).collect();
    parse_options(&args).unwrap()
}

/// Write `contents` to a file unique to this test process.
fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("verdict-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_lex_lists_tokens() {
    let out = lex(&opts(&["a > 1"])).unwrap();
    assert!(out.starts_with("Tokens (4):\n"), "{out}");
    assert!(out.contains("@ 1:3"), "{out}");
}

#[test]
fn test_parse_prints_canonical_form() {
    let out = parse(&opts(&["a  and (b)"])).unwrap();
    assert!(out.ends_with("Canonical: a AND b\n"), "{out}");
}

#[test]
fn test_compile_json_and_listing() {
    assert_eq!(
        compile(&opts(&["score > 85"])).unwrap(),
        "[[\"load\",\"score\"],[\"lit\",85],[\"compare\",\"GT\"]]\n"
    );
    let listing = compile(&opts(&["score > 85", "--listing"])).unwrap();
    assert_eq!(listing.lines().count(), 3);
    assert!(listing.lines().next().unwrap().contains("[\"load\",\"score\"]"));
}

#[test]
fn test_fmt_honours_config() {
    assert_eq!(fmt(&opts(&["a+b*c"])).unwrap(), "a + b * c\n");
    assert_eq!(
        fmt(&opts(&["a+b*c", "--parens=explicit", "--spacing=compact"])).unwrap(),
        "a+(b*c)\n"
    );
}

#[test]
fn test_eval_with_context() {
    let out = eval(&opts(&["score > 85", "--context={\"score\": 90}"])).unwrap();
    assert_eq!(out, "true\n");
    assert_eq!(eval(&opts(&["2 + 3 * 4"])).unwrap(), "14\n");
}

#[test]
fn test_eval_reads_expression_file() {
    let path = scratch_file("rule.vd", "'a' + 5");
    let arg = format!("@{}", path.display());
    let out = eval(&opts(&[arg.as_str()])).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(out, "a5\n");
}

#[test]
fn test_eval_failure_renders_reason() {
    let failure = eval(&opts(&["5 / 0"])).unwrap_err();
    let rendered = failure.render(crate::render::ColorMode::Never, false);
    assert!(rendered.starts_with("error[division_by_zero]: "), "{rendered}");
}

#[test]
fn test_eval_strict_flag() {
    assert_eq!(eval(&opts(&["missing_var > 5"])).unwrap(), "undefined\n");
    let failure = eval(&opts(&["missing_var > 5", "--strict"])).unwrap_err();
    assert!(matches!(failure, Failure::Pipeline { .. }));
}

#[test]
fn test_missing_expression_is_usage_error() {
    assert!(matches!(eval(&opts(&[])), Err(Failure::Usage(_))));
    assert!(matches!(compile(&opts(&["a", "b"])), Err(Failure::Usage(_))));
    assert!(matches!(batch(&opts(&["a"])), Err(Failure::Usage(_))));
}

#[test]
fn test_run_evaluates_wire_program() {
    let path = scratch_file(
        "program.json",
        r#"[["load","score"],["lit",85],["compare","GT"]]"#,
    );
    let path_arg = path.display().to_string();
    let out = run(&opts(&[path_arg.as_str(), "--context={\"score\": 80}"]));
    let _ = std::fs::remove_file(&path);
    assert_eq!(out.unwrap(), "false\n");
}

#[test]
fn test_run_reports_bad_programs() {
    let path = scratch_file("bad.json", r#"[["teleport"]]"#);
    let path_arg = path.display().to_string();
    let failure = run(&opts(&[path_arg.as_str()])).unwrap_err();
    let _ = std::fs::remove_file(&path);
    let rendered = failure.render(crate::render::ColorMode::Never, false);
    assert!(rendered.starts_with("error[unknown_opcode]: "), "{rendered}");
}

#[test]
fn test_batch_keeps_input_order() {
    let lines: String = (0..50).map(|n| format!("{{\"n\": {n}}}\n\n")).collect();
    let path = scratch_file("contexts.jsonl", &lines);
    let path_arg = path.display().to_string();
    let out = batch(&opts(&["10 / n", path_arg.as_str()]));
    let _ = std::fs::remove_file(&path);

    let out = out.unwrap();
    let rows: Vec<&str> = out.lines().collect();
    assert_eq!(rows.len(), 50);
    assert!(rows[0].starts_with("error[division_by_zero]: "), "{}", rows[0]);
    assert_eq!(rows[1], "10");
    assert_eq!(rows[2], "5");
    assert_eq!(rows[5], "2");
}

#[test]
fn test_parse_contexts_reports_line_numbers() {
    let contexts = parse_contexts("{\"a\": 1}\n\n{\"a\": 2}\n").unwrap();
    assert_eq!(contexts.len(), 2);

    let err = parse_contexts("{\"a\": 1}\n[1]\n").unwrap_err();
    assert!(err.starts_with("line 2: invalid context: "), "{err}");
}

#[test]
fn test_input_failure_render() {
    let failure = Failure::Input("cannot find file 'x'".to_string());
    assert_eq!(
        failure.render(crate::render::ColorMode::Never, false),
        "error: cannot find file 'x'\n"
    );
}
