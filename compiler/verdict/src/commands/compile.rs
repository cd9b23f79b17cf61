//! `compile`: lower an expression and print the program.

use super::{expression_input, CliOptions, CommandResult, Failure};

const USAGE: &str = "Usage: verdict compile <expr|@file> [--listing]";

/// Wire-format JSON by default; `--listing` prints one numbered
/// instruction per line.
pub fn compile(options: &CliOptions) -> CommandResult {
    let source = expression_input(options, USAGE)?;
    let program = crate::compile(&source).map_err(|e| Failure::pipeline(e, &source))?;
    tracing::debug!(instructions = program.len(), "compiled expression");

    if options.listing {
        Ok(program.to_string())
    } else {
        Ok(format!("{}\n", program.to_json()))
    }
}
