//! Expression parsing.
//!
//! # Module Structure
//!
//! - `mod.rs`: Entry point (`parse_expr`) and the binary precedence chain
//! - `operators.rs`: Operator matching helpers
//! - `postfix.rs`: Property access, qualified calls, bracket access
//! - `primary.rs`: Literals, identifiers, lists, objects, calls, durations

mod operators;
mod postfix;
mod primary;

use verdict_ir::{Expr, TokenKind, UnaryOp};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression at the lowest precedence level.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.nested(Self::parse_or)
    }

    /// Parse `OR` / `||` (lowest precedence).
    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_and()?;
        let chain_base = self.depth;

        while self.check(&TokenKind::Or) || self.check(&TokenKind::PipePipe) {
            self.deepen()?;
            self.advance();
            let right = self.parse_and()?;
            left = Expr::LogicalOr {
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        self.depth = chain_base;
        Ok(left)
    }

    /// Parse `AND` / `&&`.
    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_not()?;
        let chain_base = self.depth;

        while self.check(&TokenKind::And) || self.check(&TokenKind::AmpAmp) {
            self.deepen()?;
            self.advance();
            let right = self.parse_not()?;
            left = Expr::LogicalAnd {
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        self.depth = chain_base;
        Ok(left)
    }

    /// Parse prefix `NOT`, which applies to a whole comparison.
    fn parse_not(&mut self) -> Result<Expr, ParseError> {
        if self.check(&TokenKind::Not) {
            self.advance();
            let operand = self.nested(Self::parse_not)?;
            return Ok(Expr::LogicalNot {
                operand: Box::new(operand),
            });
        }
        self.parse_comparison()
    }

    /// Parse a comparison chain: `a < b < c` folds left.
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_membership()?;
        let chain_base = self.depth;

        while let Some(op) = self.match_compare_op() {
            self.deepen()?;
            self.advance();
            let right = self.parse_membership()?;
            left = Expr::Comparison {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        self.depth = chain_base;
        Ok(left)
    }

    /// Parse `IN`, `CONTAINS`, and `NOT IN`.
    fn parse_membership(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;
        let chain_base = self.depth;

        while let Some((op, negated)) = self.match_membership_op() {
            self.deepen()?;
            self.advance();
            if negated {
                self.deepen()?;
                self.advance();
            }
            let right = self.parse_additive()?;
            let membership = Expr::Membership {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
            left = if negated {
                Expr::LogicalNot {
                    operand: Box::new(membership),
                }
            } else {
                membership
            };
        }

        self.depth = chain_base;
        Ok(left)
    }

    /// Parse `+` and `-`.
    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;
        let chain_base = self.depth;

        while let Some(op) = self.match_additive_op() {
            self.deepen()?;
            self.advance();
            let right = self.parse_multiplicative()?;
            left = Expr::Arithmetic {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        self.depth = chain_base;
        Ok(left)
    }

    /// Parse `*`, `/`, and `%`.
    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;
        let chain_base = self.depth;

        while let Some(op) = self.match_multiplicative_op() {
            self.deepen()?;
            self.advance();
            let right = self.parse_unary()?;
            left = Expr::Arithmetic {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        self.depth = chain_base;
        Ok(left)
    }

    /// Parse prefix `-` and `!`.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.current_kind() {
            TokenKind::Minus => UnaryOp::Minus,
            TokenKind::Bang => UnaryOp::Bang,
            _ => return self.parse_postfix(),
        };
        self.advance();
        let operand = self.nested(Self::parse_unary)?;
        Ok(Expr::Unary {
            op,
            operand: Box::new(operand),
        })
    }
}
