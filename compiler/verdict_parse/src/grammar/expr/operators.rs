//! Operator matching helpers.
//!
//! Each helper inspects the current token without consuming it and
//! returns the operator it denotes at that precedence level.

use verdict_ir::{ArithOp, CompareOp, MembershipOp, TokenKind};

use crate::Parser;

impl Parser<'_> {
    pub(super) fn match_compare_op(&self) -> Option<CompareOp> {
        match self.current_kind() {
            TokenKind::Eq => Some(CompareOp::Eq),
            TokenKind::NotEq => Some(CompareOp::NotEq),
            TokenKind::StrictEq => Some(CompareOp::StrictEq),
            TokenKind::StrictNotEq => Some(CompareOp::StrictNotEq),
            TokenKind::Gt => Some(CompareOp::Gt),
            TokenKind::GtEq => Some(CompareOp::GtEq),
            TokenKind::Lt => Some(CompareOp::Lt),
            TokenKind::LtEq => Some(CompareOp::LtEq),
            _ => None,
        }
    }

    /// Membership operator, plus whether it is the two-token `NOT IN` form.
    pub(super) fn match_membership_op(&self) -> Option<(MembershipOp, bool)> {
        match self.current_kind() {
            TokenKind::In => Some((MembershipOp::In, false)),
            TokenKind::Contains => Some((MembershipOp::Contains, false)),
            TokenKind::Not if matches!(self.cursor.peek_next_kind(), TokenKind::In) => {
                Some((MembershipOp::In, true))
            }
            _ => None,
        }
    }

    pub(super) fn match_additive_op(&self) -> Option<ArithOp> {
        match self.current_kind() {
            TokenKind::Plus => Some(ArithOp::Add),
            TokenKind::Minus => Some(ArithOp::Sub),
            _ => None,
        }
    }

    pub(super) fn match_multiplicative_op(&self) -> Option<ArithOp> {
        match self.current_kind() {
            TokenKind::Star => Some(ArithOp::Mul),
            TokenKind::Slash => Some(ArithOp::Div),
            TokenKind::Percent => Some(ArithOp::Mod),
            _ => None,
        }
    }
}
