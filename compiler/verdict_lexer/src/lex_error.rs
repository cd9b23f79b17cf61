//! Lexer error types.
//!
//! A `LexError` pairs WHAT went wrong (`kind`) with WHERE: the byte span
//! for rendering and the 1-based line/column the message reports.

use verdict_ir::Span;

/// A lexer error. Lexing stops at the first one.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{kind} at line {line}, column {column}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    pub line: u32,
    pub column: u32,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LexErrorKind {
    /// Input ended inside a `"…"` or `'…'` literal.
    #[error("unterminated string literal")]
    UnterminatedString { quote: char },
    /// Input ended inside a `#…#` literal.
    #[error("unterminated date literal")]
    UnterminatedDate,
    /// Unsupported escape such as `\q`.
    #[error("invalid escape sequence '\\{escape_char}'")]
    InvalidEscape { escape_char: char },
    #[error("invalid date literal '{text}'")]
    InvalidDate { text: String },
    #[error("invalid datetime literal '{text}'")]
    InvalidDateTime { text: String },
    /// Integer literal does not fit in `i64`.
    #[error("integer literal '{text}' is out of range")]
    IntOverflow { text: String },
    #[error("invalid float literal '{text}'")]
    InvalidFloat { text: String },
    #[error("unexpected character '{ch}'")]
    UnexpectedChar { ch: char },
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span, line: u32, column: u32) -> Self {
        LexError {
            kind,
            span,
            line,
            column,
        }
    }

    /// The message without position, e.g. `unterminated string literal`.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
