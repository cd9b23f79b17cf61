//! `batch`: evaluate one expression against every context in a JSON Lines
//! file, in parallel.

use std::fmt::Write;

use verdict_eval::{Context, EvalError};

use crate::Engine;

use super::{load_text, read_file, CliOptions, CommandResult, Failure};

const USAGE: &str = "Usage: verdict batch <expr|@file> <contexts.jsonl> [--strict] [--now=<datetime>]";

/// One output line per non-blank input line, in input order. Evaluation
/// errors are reported inline so one bad context does not hide the rest.
pub fn batch(options: &CliOptions) -> CommandResult {
    let [expr, contexts_path] = options.inputs.as_slice() else {
        return Err(Failure::Usage(USAGE.to_string()));
    };
    let source = load_text(expr).map_err(Failure::Input)?;
    let contexts = parse_contexts(&read_file(contexts_path).map_err(Failure::Input)?)
        .map_err(Failure::Input)?;

    let engine = Engine::new().with_options(options.eval_options());
    let program = engine
        .compile(&source)
        .map_err(|e| Failure::pipeline(e, &source))?;

    let results = engine.evaluate_many(&program, &contexts);
    tracing::debug!(contexts = contexts.len(), "batch evaluated");

    let mut out = String::new();
    for result in results {
        match result {
            Ok(value) => {
                let _ = writeln!(out, "{value}");
            }
            Err(error) => {
                let _ = writeln!(out, "{}", inline_error(&error));
            }
        }
    }
    Ok(out)
}

/// Blank lines are skipped; line numbers in errors are 1-based.
pub(crate) fn parse_contexts(text: &str) -> Result<Vec<Context>, String> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            Context::from_json_str(line)
                .map_err(|e| format!("line {}: invalid context: {e}", index + 1))
        })
        .collect()
}

fn inline_error(error: &EvalError) -> String {
    match error.reason() {
        Some(reason) => format!("error[{reason}]: {error}"),
        None => format!("error: {error}"),
    }
}
