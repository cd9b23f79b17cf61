//! Postfix parsing: `.name`, `.fn(args)`, and `[key]`.

use verdict_ir::{Expr, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse a primary expression followed by any number of postfix operators.
    pub(super) fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;
        let chain_base = self.depth;

        loop {
            match self.current_kind() {
                TokenKind::Dot => {
                    self.deepen()?;
                    self.advance();
                    expr = self.parse_member(expr)?;
                }
                TokenKind::LBracket => {
                    self.deepen()?;
                    self.advance();
                    let key = self.parse_expr()?;
                    if !self.cursor.eat(&TokenKind::RBracket) {
                        return Err(ParseError::unclosed(self.current(), ']', "bracket access"));
                    }
                    expr = Expr::BracketAccess {
                        base: Box::new(expr),
                        key: Box::new(key),
                    };
                }
                _ => break,
            }
        }

        self.depth = chain_base;
        Ok(expr)
    }

    /// Parse the part after `.`: a property name or a qualified call.
    fn parse_member(&mut self, base: Expr) -> Result<Expr, ParseError> {
        match self.current_kind().clone() {
            TokenKind::Ident(name) => {
                self.advance();
                Ok(Expr::PropertyAccess {
                    base: Box::new(base),
                    name,
                })
            }
            TokenKind::FunctionName(name) => {
                let Some(path) = base.identifier_path() else {
                    return Err(ParseError::at(
                        self.current(),
                        "qualified function call requires a dotted identifier path",
                    ));
                };
                let qualified = format!("{path}.{name}");
                self.advance();
                self.parse_call(qualified)
            }
            other => Err(ParseError::at(
                self.current(),
                format!("expected property name after '.', found {other}"),
            )),
        }
    }
}
