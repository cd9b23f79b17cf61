//! Command handlers for the `verdict` CLI.
//!
//! Each handler takes the parsed flags and returns the text to print on
//! stdout, or a [`Failure`] that `main` renders to stderr before exiting
//! with status 1.

mod batch;
mod compile;
mod debug;
mod eval;
mod fmt;
mod options;
mod run;

use std::io::IsTerminal;

pub use batch::batch;
pub use compile::compile;
pub use debug::{lex, parse};
pub use eval::eval;
pub use fmt::fmt;
pub use options::{load_text, parse_options, read_file, CliOptions};
pub use run::run;

use crate::render::{ColorMode, Renderer};
use crate::Error;

/// Why a command did not produce output.
#[derive(Debug)]
pub enum Failure {
    /// Wrong arguments; the message is a usage line.
    Usage(String),
    /// Unreadable file, malformed context, or similar.
    Input(String),
    /// The pipeline rejected the expression or failed at runtime.
    Pipeline {
        error: Error,
        source: Option<String>,
    },
}

impl Failure {
    pub(crate) fn pipeline(error: impl Into<Error>, source: &str) -> Self {
        Failure::Pipeline {
            error: error.into(),
            source: Some(source.to_string()),
        }
    }

    /// Text written to stderr.
    pub fn render(&self, color: ColorMode, is_tty: bool) -> String {
        match self {
            Failure::Usage(usage) => format!("{usage}\n"),
            Failure::Input(message) => format!("error: {message}\n"),
            Failure::Pipeline { error, source } => {
                Renderer::new(color, is_tty).render(error, source.as_deref())
            }
        }
    }

    /// Print to stderr and exit with status 1.
    pub fn exit(&self, color: ColorMode) -> ! {
        eprint!("{}", self.render(color, std::io::stderr().is_terminal()));
        std::process::exit(1);
    }
}

pub type CommandResult = Result<String, Failure>;

/// The single `<expr>` positional, loaded through `@path` if needed.
pub(crate) fn expression_input(options: &CliOptions, usage: &str) -> Result<String, Failure> {
    match options.inputs.as_slice() {
        [expr] => load_text(expr).map_err(Failure::Input),
        _ => Err(Failure::Usage(usage.to_string())),
    }
}

#[cfg(test)]
mod tests;
