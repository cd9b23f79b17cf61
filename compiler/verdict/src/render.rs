//! Human-readable error rendering with optional ANSI color.
//!
//! Lex and parse errors point into the source, so they are rendered with
//! the offending line and a caret underline:
//!
//! ```text
//! error: expected expression, found end of input
//!  --> 1:8
//!   |
//! 1 | score >
//!   |        ^
//! ```
//!
//! Evaluation errors carry no position and render as a single header line
//! tagged with their reason code.

use std::fmt::Write;
use std::str::FromStr;

use verdict_ir::Span;

use crate::Error;

/// ANSI color codes.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m";
    pub const GUTTER: &str = "\x1b[1;34m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a yes/no decision. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown color mode '{0}' (expected auto, always, or never)")]
pub struct UnknownColorMode(pub String);

impl FromStr for ColorMode {
    type Err = UnknownColorMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(UnknownColorMode(other.to_string())),
        }
    }
}

/// Renders errors into a string buffer.
pub struct Renderer {
    colors: bool,
    out: String,
}

impl Renderer {
    pub fn new(mode: ColorMode, is_tty: bool) -> Self {
        Renderer {
            colors: mode.should_use_colors(is_tty),
            out: String::new(),
        }
    }

    /// Render `error`; `source` enables the snippet for positioned errors.
    pub fn render(mut self, error: &Error, source: Option<&str>) -> String {
        match error {
            Error::Lex(e) => self.positioned(&e.message(), e.span, e.line, e.column, source),
            Error::Parse(e) => self.positioned(&e.message, e.span, e.line, e.column, source),
            Error::Eval(e) => {
                let code = e.reason().map(|reason| reason.as_str());
                self.header(code, &e.to_string());
            }
            Error::Wire(e) => self.header(None, &format!("invalid program: {e}")),
        }
        self.out
    }

    fn paint(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.out, "{color}{text}{}", colors::RESET);
        } else {
            self.out.push_str(text);
        }
    }

    fn header(&mut self, code: Option<&str>, message: &str) {
        self.paint("error", colors::ERROR);
        if let Some(code) = code {
            self.paint(&format!("[{code}]"), colors::BOLD);
        }
        let _ = writeln!(self.out, ": {message}");
    }

    fn positioned(&mut self, message: &str, span: Span, line: u32, column: u32, source: Option<&str>) {
        self.header(None, message);
        let gutter = " ".repeat(line.to_string().len());
        let _ = write!(self.out, "{gutter}");
        self.paint("-->", colors::GUTTER);
        let _ = writeln!(self.out, " {line}:{column}");

        let Some(source) = source else {
            return;
        };
        let Some(snippet) = Snippet::locate(source, span) else {
            return;
        };

        self.gutter_line(&gutter, "");
        self.paint(&format!("{line} |"), colors::GUTTER);
        let _ = writeln!(self.out, " {}", snippet.text);
        let underline = format!(
            "{}{}",
            " ".repeat(snippet.offset),
            "^".repeat(snippet.width)
        );
        self.gutter_line(&gutter, &underline);
    }

    fn gutter_line(&mut self, gutter: &str, rest: &str) {
        self.paint(&format!("{gutter} |"), colors::GUTTER);
        if rest.is_empty() {
            self.out.push('\n');
        } else {
            self.out.push(' ');
            self.paint(rest, colors::ERROR);
            self.out.push('\n');
        }
    }
}

/// The source line containing a span, with the caret position in chars.
#[derive(Debug, PartialEq, Eq)]
struct Snippet<'a> {
    text: &'a str,
    offset: usize,
    width: usize,
}

impl<'a> Snippet<'a> {
    fn locate(source: &'a str, span: Span) -> Option<Snippet<'a>> {
        let start = span.start.min(source.len());
        if !source.is_char_boundary(start) {
            return None;
        }
        let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
        let line_end = source[start..]
            .find('\n')
            .map_or(source.len(), |i| start + i);
        let text = source[line_start..line_end].trim_end_matches('\r');
        let offset = source[line_start..start].chars().count();
        let end = span.end.clamp(start, line_end);
        let width = source
            .get(start..end)
            .map_or(0, |covered| covered.chars().count())
            .max(1);
        Some(Snippet {
            text,
            offset,
            width,
        })
    }
}

/// Render an error without color.
pub fn render_plain(error: &Error, source: Option<&str>) -> String {
    Renderer::new(ColorMode::Never, false).render(error, source)
}

#[cfg(test)]
mod tests;
