//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access and navigation. The stream is treated
//! as ending in `Eof` even when the caller's slice does not.

use verdict_ir::{Span, Token, TokenKind};

/// Cursor for navigating tokens.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    eof: Token,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        let eof = match tokens.last() {
            Some(last) => Token::new(
                TokenKind::Eof,
                Span::point(last.span.end),
                last.line,
                last.column + last.length,
                0,
            ),
            None => Token::dummy(TokenKind::Eof),
        };
        Cursor {
            tokens,
            pos: 0,
            eof,
        }
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    #[inline]
    pub fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    /// Kind of the token after the current one.
    #[inline]
    pub fn peek_next_kind(&self) -> &TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(&self.eof.kind, |t| &t.kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check if the current token has the same kind as `kind`, ignoring payloads.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(kind)
    }

    /// Check for an identifier spelled `word`, ignoring ASCII case.
    pub fn check_word(&self, word: &str) -> bool {
        self.current_kind()
            .as_ident()
            .is_some_and(|ident| ident.eq_ignore_ascii_case(word))
    }

    /// Advance to the next token, returning the one consumed.
    ///
    /// Advancing past the end keeps returning `Eof`.
    #[inline]
    pub fn advance(&mut self) -> &Token {
        let current = self.pos;
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        self.tokens.get(current).unwrap_or(&self.eof)
    }

    /// Consume the current token if it matches `kind`.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests;
