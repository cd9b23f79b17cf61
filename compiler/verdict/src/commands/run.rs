//! `run`: evaluate a wire-format program.

use crate::Engine;

use super::{read_file, CliOptions, CommandResult, Failure};

const USAGE: &str =
    "Usage: verdict run <program.json> [--context=<json|@file>] [--strict] [--now=<datetime>]";

pub fn run(options: &CliOptions) -> CommandResult {
    let [path] = options.inputs.as_slice() else {
        return Err(Failure::Usage(USAGE.to_string()));
    };
    let text = read_file(path).map_err(Failure::Input)?;
    let json: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| Failure::Input(format!("'{path}' is not valid JSON: {e}")))?;
    let context = options.load_context().map_err(Failure::Input)?;
    let engine = Engine::new().with_options(options.eval_options());

    let value = engine
        .evaluate_json(&json, &context)
        .map_err(|error| Failure::Pipeline {
            error: error.into(),
            source: None,
        })?;
    Ok(format!("{value}\n"))
}
