//! Verdict: a sandboxed expression engine.
//!
//! Source text goes through four stages:
//!
//! ```text
//! source ─▶ verdict_lexer ─▶ verdict_parse ─▶ verdict_compile ─▶ verdict_eval
//!            tokens           Expr              Program            Value
//! ```
//!
//! `verdict_fmt` turns an `Expr` back into canonical source text.
//!
//! Compile a predicate once, then evaluate it against as many contexts as
//! needed; a [`Program`] is immutable and may be shared across threads.
//!
//! ```text
//! let engine = Engine::new();
//! let program = engine.compile("score > 85")?;
//! let verdict = engine.evaluate(&program, &Context::new().with("score", 90i64))?;
//! ```

pub mod commands;
pub mod render;
mod tracing_setup;

use rayon::prelude::*;

pub use tracing_setup::init_tracing;
pub use verdict_eval::{
    Context, ContextError, EvalError, EvalOptions, EvalResult, FunctionTable,
    FunctionTableBuilder, ReasonCode,
};
pub use verdict_fmt::{decompile, format_expr, FormatConfig, Parenthesization, Spacing};
pub use verdict_ir::{Expr, Instruction, Program, Value, WireError};
pub use verdict_lexer::LexError;
pub use verdict_parse::{ParseConfig, ParseError};

/// Any error the pipeline can produce.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error(transparent)]
    Wire(#[from] WireError),
}

impl Error {
    /// Byte span in the source text, for lex and parse errors.
    pub fn span(&self) -> Option<verdict_ir::Span> {
        match self {
            Error::Lex(e) => Some(e.span),
            Error::Parse(e) => Some(e.span),
            Error::Eval(_) | Error::Wire(_) => None,
        }
    }
}

/// Parse source text with the default parser limits.
pub fn parse(source: &str) -> Result<Expr, Error> {
    parse_with_config(source, ParseConfig::default())
}

pub fn parse_with_config(source: &str, config: ParseConfig) -> Result<Expr, Error> {
    let tokens = verdict_lexer::tokenize(source)?;
    Ok(verdict_parse::parse_with_config(&tokens, config)?)
}

/// Parse and lower source text to a program.
pub fn compile(source: &str) -> Result<Program, Error> {
    let expr = parse(source)?;
    Ok(verdict_compile::lower(&expr))
}

/// Evaluate a compiled program with default options.
pub fn evaluate(program: &Program, context: &Context, functions: &FunctionTable) -> EvalResult {
    verdict_eval::evaluate(program, context, functions)
}

/// Compile and evaluate in one step.
pub fn evaluate_source(
    source: &str,
    context: &Context,
    functions: &FunctionTable,
) -> Result<Value, Error> {
    let program = compile(source)?;
    Ok(evaluate(&program, context, functions)?)
}

/// Reformat source text through a parse and decompile.
pub fn reformat(source: &str, config: &FormatConfig) -> Result<String, Error> {
    let expr = parse(source)?;
    Ok(format_expr(&expr, config))
}

/// Bundles the function table, evaluation options, and parser limits a
/// host application uses for every expression.
#[derive(Clone, Debug)]
pub struct Engine {
    functions: FunctionTable,
    options: EvalOptions,
    parse_config: ParseConfig,
}

impl Engine {
    /// Engine with the built-in functions and default options.
    pub fn new() -> Self {
        Engine {
            functions: FunctionTable::with_builtins(),
            options: EvalOptions::default(),
            parse_config: ParseConfig::default(),
        }
    }

    #[must_use]
    pub fn with_functions(mut self, functions: FunctionTable) -> Self {
        self.functions = functions;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: EvalOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_parse_config(mut self, config: ParseConfig) -> Self {
        self.parse_config = config;
        self
    }

    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    pub fn options(&self) -> EvalOptions {
        self.options
    }

    pub fn compile(&self, source: &str) -> Result<Program, Error> {
        let expr = parse_with_config(source, self.parse_config)?;
        Ok(verdict_compile::lower(&expr))
    }

    pub fn evaluate(&self, program: &Program, context: &Context) -> EvalResult {
        verdict_eval::evaluate_with_options(program, context, &self.functions, self.options)
    }

    pub fn evaluate_source(&self, source: &str, context: &Context) -> Result<Value, Error> {
        let program = self.compile(source)?;
        Ok(self.evaluate(&program, context)?)
    }

    /// Decode a wire-format program and evaluate it.
    pub fn evaluate_json(&self, program: &serde_json::Value, context: &Context) -> EvalResult {
        verdict_eval::evaluate_json(program, context, &self.functions, self.options)
    }

    /// Evaluate one program against many contexts in parallel.
    ///
    /// Results are returned in the order of `contexts`.
    pub fn evaluate_many(&self, program: &Program, contexts: &[Context]) -> Vec<EvalResult> {
        contexts
            .par_iter()
            .map(|context| self.evaluate(program, context))
            .collect()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}
