//! `eval`: compile and evaluate an expression against a context.

use crate::Engine;

use super::{expression_input, CliOptions, CommandResult, Failure};

const USAGE: &str =
    "Usage: verdict eval <expr|@file> [--context=<json|@file>] [--strict] [--now=<datetime>]";

pub fn eval(options: &CliOptions) -> CommandResult {
    let source = expression_input(options, USAGE)?;
    let context = options.load_context().map_err(Failure::Input)?;
    let engine = Engine::new().with_options(options.eval_options());

    let value = engine
        .evaluate_source(&source, &context)
        .map_err(|e| Failure::pipeline(e, &source))?;
    Ok(format!("{value}\n"))
}
