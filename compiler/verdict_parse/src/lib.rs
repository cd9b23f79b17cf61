//! Recursive-descent parser for the Verdict expression language.
//!
//! Consumes the token list produced by `verdict_lexer` and builds a single
//! [`Expr`]. Precedence, lowest to highest:
//!
//! ```text
//! OR / ||
//! AND / &&
//! NOT (prefix)
//! comparisons  = == === != !== <> > >= < <=
//! IN  CONTAINS  NOT IN
//! + -
//! * / %
//! unary - !
//! postfix .name  .fn(args)  [key]
//! primary
//! ```
//!
//! All binary levels are left-associative. Parsing stops at the first
//! error; there is no recovery.

mod cursor;
mod error;
mod grammar;

use verdict_ir::stack::ensure_sufficient_stack;
use verdict_ir::{Expr, Token, TokenKind};

pub use cursor::Cursor;
pub use error::ParseError;

/// Parser limits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseConfig {
    /// Maximum nesting of parentheses, brackets, calls, and prefix operators.
    pub max_depth: usize,
}

impl ParseConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        ParseConfig {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parse a complete expression with the default configuration.
pub fn parse(tokens: &[Token]) -> Result<Expr, ParseError> {
    parse_with_config(tokens, ParseConfig::default())
}

/// Parse a complete expression, rejecting any tokens left over after it.
pub fn parse_with_config(tokens: &[Token], config: ParseConfig) -> Result<Expr, ParseError> {
    let mut parser = Parser::new(tokens, config);
    let expr = parser.parse_expr()?;
    if !parser.cursor.is_at_end() {
        let err = ParseError::trailing_token(parser.cursor.current());
        tracing::debug!(%err, "parse failed");
        return Err(err);
    }
    tracing::trace!(tokens = tokens.len(), "parsed expression");
    Ok(expr)
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    config: ParseConfig,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], config: ParseConfig) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            config,
            depth: 0,
        }
    }

    #[inline]
    fn current(&self) -> &Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> &TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> Token {
        self.cursor.advance().clone()
    }

    /// Run `f` one nesting level deeper.
    ///
    /// Enforces `max_depth` and grows the stack when it runs low.
    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= self.config.max_depth {
            return Err(ParseError::too_deep(self.current(), self.config.max_depth));
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| f(self));
        self.depth -= 1;
        result
    }

    /// Count one folded chain node against `max_depth`.
    ///
    /// Left-folded operators and postfix steps deepen the tree without
    /// recursing, so the caller restores `depth` once the chain ends.
    fn deepen(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.config.max_depth {
            return Err(ParseError::too_deep(self.current(), self.config.max_depth));
        }
        self.depth += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
