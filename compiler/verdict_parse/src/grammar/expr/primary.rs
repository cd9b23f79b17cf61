//! Primary expressions: literals, identifiers, lists, objects, groups,
//! calls, and duration literals.

use verdict_ir::{Direction, DurationUnit, Expr, Literal, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(super) fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.current().clone();
        match token.kind {
            TokenKind::Int(n) => {
                self.advance();
                if self.check_duration_unit() {
                    return self.parse_duration(n);
                }
                Ok(Expr::Literal(Literal::Int(n)))
            }
            TokenKind::Float(f) => {
                if self.next_is_duration_unit() {
                    return Err(ParseError::fractional_duration(self.current()));
                }
                self.advance();
                Ok(Expr::Literal(Literal::Float(f)))
            }
            TokenKind::Str(s) => {
                self.advance();
                Ok(Expr::Literal(Literal::Str(s)))
            }
            TokenKind::Bool(b) => {
                self.advance();
                Ok(Expr::Literal(Literal::Bool(b)))
            }
            TokenKind::Date(d) => {
                self.advance();
                Ok(Expr::Literal(Literal::Date(d)))
            }
            TokenKind::DateTime(dt) => {
                self.advance();
                Ok(Expr::Literal(Literal::DateTime(dt)))
            }
            TokenKind::Ident(name) => {
                self.advance();
                Ok(Expr::Identifier(name))
            }
            TokenKind::FunctionName(name) => {
                self.advance();
                self.parse_call(name)
            }
            TokenKind::LBracket => {
                self.advance();
                self.parse_list()
            }
            TokenKind::LBrace => {
                self.advance();
                self.parse_object()
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                if !self.cursor.eat(&TokenKind::RParen) {
                    return Err(ParseError::unclosed_paren(self.current(), &token));
                }
                Ok(inner)
            }
            _ => Err(ParseError::expected_expression(&token)),
        }
    }

    /// Parse `(args)` after a function name has been consumed.
    pub(super) fn parse_call(&mut self, name: String) -> Result<Expr, ParseError> {
        if !self.cursor.eat(&TokenKind::LParen) {
            return Err(ParseError::at(
                self.current(),
                format!(
                    "expected '(' after function name '{name}', found {}",
                    self.current_kind()
                ),
            ));
        }

        let mut args = Vec::new();
        if !self.cursor.eat(&TokenKind::RParen) {
            loop {
                args.push(self.parse_expr()?);
                if self.cursor.eat(&TokenKind::Comma) {
                    continue;
                }
                if self.cursor.eat(&TokenKind::RParen) {
                    break;
                }
                return Err(ParseError::at(
                    self.current(),
                    format!(
                        "expected ',' or ')' in arguments to '{name}', found {}",
                        self.current_kind()
                    ),
                ));
            }
        }

        Ok(Expr::FunctionCall { name, args })
    }

    /// Parse list elements after `[`.
    fn parse_list(&mut self) -> Result<Expr, ParseError> {
        let mut elements = Vec::new();
        if self.cursor.eat(&TokenKind::RBracket) {
            return Ok(Expr::List(elements));
        }

        loop {
            elements.push(self.parse_expr()?);
            if self.cursor.eat(&TokenKind::Comma) {
                continue;
            }
            if self.cursor.eat(&TokenKind::RBracket) {
                break;
            }
            return Err(ParseError::unclosed(self.current(), ']', "list"));
        }

        Ok(Expr::List(elements))
    }

    /// Parse `key: value` entries after `{`. Keys are identifiers or strings.
    fn parse_object(&mut self) -> Result<Expr, ParseError> {
        let mut entries = Vec::new();
        if self.cursor.eat(&TokenKind::RBrace) {
            return Ok(Expr::Object(entries));
        }

        loop {
            let key = match self.current_kind() {
                TokenKind::Ident(key) | TokenKind::Str(key) => key.clone(),
                other => {
                    return Err(ParseError::at(
                        self.current(),
                        format!("object key must be an identifier or string, found {other}"),
                    ))
                }
            };
            self.advance();

            if !self.cursor.eat(&TokenKind::Colon) {
                return Err(ParseError::at(
                    self.current(),
                    format!(
                        "expected ':' after object key '{key}', found {}",
                        self.current_kind()
                    ),
                ));
            }
            let value = self.parse_expr()?;
            entries.push((key, value));

            if self.cursor.eat(&TokenKind::Comma) {
                continue;
            }
            if self.cursor.eat(&TokenKind::RBrace) {
                break;
            }
            return Err(ParseError::unclosed(self.current(), '}', "object"));
        }

        Ok(Expr::Object(entries))
    }

    fn check_duration_unit(&self) -> bool {
        self.current_kind()
            .as_ident()
            .is_some_and(|word| DurationUnit::from_word(word).is_some())
    }

    fn next_is_duration_unit(&self) -> bool {
        self.cursor
            .peek_next_kind()
            .as_ident()
            .is_some_and(|word| DurationUnit::from_word(word).is_some())
    }

    /// Parse `N unit (M unit)*` with the first amount already consumed,
    /// then an optional `ago` / `from now`.
    fn parse_duration(&mut self, first_amount: i64) -> Result<Expr, ParseError> {
        let mut parts = Vec::new();
        let mut amount = first_amount;

        loop {
            let unit = self
                .current_kind()
                .as_ident()
                .and_then(DurationUnit::from_word)
                .ok_or_else(|| {
                    ParseError::at(
                        self.current(),
                        format!("expected duration unit, found {}", self.current_kind()),
                    )
                })?;
            self.advance();
            parts.push((amount, unit));

            let next_is_unit = self.next_is_duration_unit();
            match self.current_kind() {
                TokenKind::Int(n) if next_is_unit => {
                    amount = *n;
                    self.advance();
                }
                TokenKind::Float(_) if next_is_unit => {
                    return Err(ParseError::fractional_duration(self.current()));
                }
                _ => break,
            }
        }

        let duration = Expr::Duration(parts);
        let direction = if self.cursor.check_word("ago") {
            self.advance();
            Direction::Ago
        } else if self.cursor.check_word("from") {
            self.advance();
            if !self.cursor.check_word("now") {
                return Err(ParseError::at(
                    self.current(),
                    format!("expected 'now' after 'from', found {}", self.current_kind()),
                ));
            }
            self.advance();
            Direction::FromNow
        } else {
            return Ok(duration);
        };

        Ok(Expr::RelativeDate {
            duration: Box::new(duration),
            direction,
        })
    }
}
