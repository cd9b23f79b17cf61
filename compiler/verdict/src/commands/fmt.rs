//! `fmt`: print the canonical form of an expression.

use super::{expression_input, CliOptions, CommandResult, Failure};

const USAGE: &str =
    "Usage: verdict fmt <expr|@file> [--parens=minimal|explicit|none] [--spacing=normal|compact|verbose]";

pub fn fmt(options: &CliOptions) -> CommandResult {
    let source = expression_input(options, USAGE)?;
    let formatted =
        crate::reformat(&source, &options.format).map_err(|e| Failure::pipeline(e, &source))?;
    Ok(format!("{formatted}\n"))
}
