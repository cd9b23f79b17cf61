//! Token types produced by the lexer.
//!
//! Literal tokens carry their cooked value: string escapes are already
//! resolved and date literals are already validated, so the parser never
//! looks back at source text.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use crate::Span;

/// A token with its source position.
///
/// `line` and `column` are 1-based and count characters; `length` is the
/// number of characters the token covers; `span` is the byte range.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub line: u32,
    pub column: u32,
    pub length: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span, line: u32, column: u32, length: u32) -> Self {
        Token {
            kind,
            span,
            line,
            column,
            length,
        }
    }

    /// Create a token with a placeholder position, for tests and synthesized input.
    pub fn dummy(kind: TokenKind) -> Self {
        Token::new(kind, Span::default(), 1, 1, 0)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}:{}", self.kind, self.line, self.column)
    }
}

/// Token kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Literals
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),

    /// Plain identifier: variable name, property name, duration unit.
    Ident(String),
    /// Identifier immediately followed by `(`.
    FunctionName(String),

    // Comparison
    /// `=` or `==`
    Eq,
    /// `===`
    StrictEq,
    /// `!=` or `<>`
    NotEq,
    /// `!==`
    StrictNotEq,
    Gt,
    GtEq,
    Lt,
    LtEq,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Logical, word and symbolic forms
    And,
    Or,
    Not,
    AmpAmp,
    PipePipe,
    Bang,

    // Membership
    In,
    Contains,

    // Punctuation
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Colon,
    Comma,
    Dot,

    Eof,
}

impl TokenKind {
    /// Short category name, used in error messages.
    #[inline]
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Int(_) => "integer",
            TokenKind::Float(_) => "float",
            TokenKind::Str(_) => "string",
            TokenKind::Bool(_) => "boolean",
            TokenKind::Date(_) => "date",
            TokenKind::DateTime(_) => "datetime",
            TokenKind::Ident(_) => "identifier",
            TokenKind::FunctionName(_) => "function name",
            TokenKind::Eq => "=",
            TokenKind::StrictEq => "===",
            TokenKind::NotEq => "!=",
            TokenKind::StrictNotEq => "!==",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::AmpAmp => "&&",
            TokenKind::PipePipe => "||",
            TokenKind::Bang => "!",
            TokenKind::In => "IN",
            TokenKind::Contains => "CONTAINS",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Eof => "end of input",
        }
    }

    /// Identifier text for `Ident` tokens.
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            TokenKind::Ident(name) => Some(name),
            _ => None,
        }
    }
}

/// Human-readable description used in diagnostics: `'+'`, `identifier 'x'`.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int(n) => write!(f, "integer {n}"),
            TokenKind::Float(n) => write!(f, "float {n}"),
            TokenKind::Str(s) => write!(f, "string {s:?}"),
            TokenKind::Bool(b) => write!(f, "boolean {b}"),
            TokenKind::Date(d) => write!(f, "date #{d}#"),
            TokenKind::DateTime(dt) => write!(f, "datetime #{}#", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
            TokenKind::Ident(name) => write!(f, "identifier '{name}'"),
            TokenKind::FunctionName(name) => write!(f, "function name '{name}'"),
            TokenKind::Eof => f.write_str("end of input"),
            other => write!(f, "'{}'", other.display_name()),
        }
    }
}

#[cfg(test)]
mod tests;
