//! Parse errors.
//!
//! Every error points at the offending token. Constructors for the
//! recurring shapes live here so messages stay consistent across the
//! grammar modules.

use verdict_ir::{Span, Token};

/// A parse error with the position of the token that caused it.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{message} at line {line}, column {column}")]
pub struct ParseError {
    pub message: String,
    pub span: Span,
    pub line: u32,
    pub column: u32,
}

impl ParseError {
    /// Error located at `token`.
    #[cold]
    pub fn at(token: &Token, message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
            span: token.span,
            line: token.line,
            column: token.column,
        }
    }

    #[cold]
    pub(crate) fn expected_expression(found: &Token) -> Self {
        Self::at(found, format!("expected expression, found {}", found.kind))
    }

    #[cold]
    pub(crate) fn trailing_token(found: &Token) -> Self {
        Self::at(found, format!("unexpected token {} after expression", found.kind))
    }

    /// Missing `)` for a parenthesized expression opened at `open`.
    #[cold]
    pub(crate) fn unclosed_paren(found: &Token, open: &Token) -> Self {
        Self::at(
            found,
            format!(
                "expected ')' to close '(' opened at line {}, column {}, found {}",
                open.line, open.column, found.kind
            ),
        )
    }

    /// Missing closing delimiter for a construct: `expected ']' to close list`.
    #[cold]
    pub(crate) fn unclosed(found: &Token, delimiter: char, construct: &str) -> Self {
        Self::at(
            found,
            format!("expected '{delimiter}' to close {construct}, found {}", found.kind),
        )
    }

    #[cold]
    pub(crate) fn too_deep(found: &Token, max_depth: usize) -> Self {
        Self::at(
            found,
            format!("expression nesting exceeds the maximum depth of {max_depth}"),
        )
    }

    #[cold]
    pub(crate) fn fractional_duration(found: &Token) -> Self {
        Self::at(found, "duration amount must be an integer")
    }
}
