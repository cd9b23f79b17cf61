//! Inspection commands: `lex` and `parse`.

use std::fmt::Write;

use super::{expression_input, CliOptions, CommandResult, Failure};

const LEX_USAGE: &str = "Usage: verdict lex <expr|@file>";
const PARSE_USAGE: &str = "Usage: verdict parse <expr|@file>";

/// Print the token stream, one token per line.
pub fn lex(options: &CliOptions) -> CommandResult {
    let source = expression_input(options, LEX_USAGE)?;
    let tokens =
        verdict_lexer::tokenize(&source).map_err(|e| Failure::pipeline(e, &source))?;

    let mut out = String::new();
    let _ = writeln!(out, "Tokens ({}):", tokens.len());
    for token in &tokens {
        let _ = writeln!(out, "  {} @ {}:{}", token.kind, token.line, token.column);
    }
    Ok(out)
}

/// Print the syntax tree and its canonical source form.
pub fn parse(options: &CliOptions) -> CommandResult {
    let source = expression_input(options, PARSE_USAGE)?;
    let expr = crate::parse(&source).map_err(|e| Failure::pipeline(e, &source))?;

    let mut out = String::new();
    let _ = writeln!(out, "{expr:#?}");
    let _ = writeln!(out, "Canonical: {}", verdict_fmt::decompile(&expr));
    Ok(out)
}
