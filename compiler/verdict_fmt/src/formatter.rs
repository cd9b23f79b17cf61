//! The formatting visitor.
//!
//! Parenthesization follows [`Expr::precedence`]: a left operand is wrapped
//! when it binds more loosely than its parent, a right operand also when it
//! binds equally (every binary chain folds left).

use verdict_ir::{
    walk, ArithOp, CompareOp, Direction, DurationUnit, Expr, ExprVisitor, Literal, MembershipOp,
    UnaryOp,
};

use crate::config::{FormatConfig, Parenthesization, Spacing};
use crate::emitter::Emitter;
use crate::literal::{is_bare_key, literal_source, quote};

/// Precedence of `NOT`; its operand may be anything up to a comparison.
const NOT_PREC: u8 = 7;
/// Precedence of prefix `-` and `!`.
const UNARY_PREC: u8 = 2;
/// Precedence of `.name` and `[key]`.
const POSTFIX_PREC: u8 = 1;

#[derive(Copy, Clone)]
enum Side {
    Left,
    Right,
}

/// Writes an expression tree to an [`Emitter`].
pub struct Formatter<E: Emitter> {
    emitter: E,
    config: FormatConfig,
}

impl<E: Emitter> Formatter<E> {
    pub fn new(emitter: E, config: FormatConfig) -> Self {
        Formatter { emitter, config }
    }

    pub fn into_emitter(self) -> E {
        self.emitter
    }

    fn emit(&mut self, text: &str) {
        self.emitter.emit(text);
    }

    /// Wrap `child` in parentheses when `required` says so, or when the
    /// config asks for explicit grouping of compound operands.
    fn operand(&mut self, child: &Expr, required: bool) {
        let wrap = match self.config.parens {
            Parenthesization::None => false,
            Parenthesization::Minimal => required,
            Parenthesization::Explicit => required || child.precedence() >= UNARY_PREC,
        };
        if wrap {
            self.emit("(");
            walk(self, child);
            self.emit(")");
        } else {
            walk(self, child);
        }
    }

    fn binary_operand(&mut self, child: &Expr, parent_prec: u8, side: Side) {
        let prec = child.precedence();
        let required = match side {
            Side::Left => prec > parent_prec,
            Side::Right => prec >= parent_prec,
        };
        self.operand(child, required);
    }

    /// Symbolic operators lose their spaces in compact mode.
    fn symbol(&mut self, op: &str) {
        if self.config.spacing == Spacing::Compact {
            self.emit(op);
        } else {
            self.emitter.emit_space();
            self.emit(op);
            self.emitter.emit_space();
        }
    }

    /// Keyword operators are always spaced.
    fn keyword(&mut self, word: &str) {
        self.emitter.emit_space();
        self.emit(word);
        self.emitter.emit_space();
    }

    fn binary(&mut self, left: &Expr, right: &Expr, prec: u8, op: &str, is_keyword: bool) {
        self.binary_operand(left, prec, Side::Left);
        if is_keyword {
            self.keyword(op);
        } else {
            self.symbol(op);
        }
        self.binary_operand(right, prec, Side::Right);
    }

    fn separator(&mut self, sep: &str) {
        self.emit(sep);
        if self.config.spacing != Spacing::Compact {
            self.emitter.emit_space();
        }
    }

    fn open(&mut self, delim: &str, is_empty: bool) {
        self.emit(delim);
        if self.config.spacing == Spacing::Verbose && !is_empty {
            self.emitter.emit_space();
        }
    }

    fn close(&mut self, delim: &str, is_empty: bool) {
        if self.config.spacing == Spacing::Verbose && !is_empty {
            self.emitter.emit_space();
        }
        self.emit(delim);
    }

    fn comma_list(&mut self, items: &[Expr]) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.separator(",");
            }
            walk(self, item);
        }
    }

    fn postfix_base(&mut self, base: &Expr) {
        self.operand(base, base.precedence() > POSTFIX_PREC);
    }
}

impl<E: Emitter> ExprVisitor for Formatter<E> {
    type Output = ();

    fn visit_literal(&mut self, literal: &Literal) {
        let text = literal_source(literal);
        self.emit(&text);
    }

    fn visit_identifier(&mut self, name: &str) {
        self.emit(name);
    }

    fn visit_property_access(&mut self, _whole: &Expr, base: &Expr, name: &str) {
        self.postfix_base(base);
        self.emit(".");
        self.emit(name);
    }

    fn visit_bracket_access(&mut self, base: &Expr, key: &Expr) {
        self.postfix_base(base);
        self.open("[", false);
        walk(self, key);
        self.close("]", false);
    }

    fn visit_comparison(&mut self, op: CompareOp, left: &Expr, right: &Expr) {
        self.binary(left, right, 6, op.as_symbol(), false);
    }

    fn visit_arithmetic(&mut self, op: ArithOp, left: &Expr, right: &Expr) {
        self.binary(left, right, op.precedence(), op.as_symbol(), false);
    }

    fn visit_unary(&mut self, op: UnaryOp, operand: &Expr) {
        self.emit(op.as_symbol());
        self.operand(operand, operand.precedence() > UNARY_PREC);
    }

    fn visit_logical_and(&mut self, left: &Expr, right: &Expr) {
        self.binary(left, right, 8, "AND", true);
    }

    fn visit_logical_or(&mut self, left: &Expr, right: &Expr) {
        self.binary(left, right, 9, "OR", true);
    }

    fn visit_logical_not(&mut self, operand: &Expr) {
        self.emit("NOT");
        self.emitter.emit_space();
        self.operand(operand, operand.precedence() > NOT_PREC);
    }

    fn visit_membership(&mut self, op: MembershipOp, left: &Expr, right: &Expr) {
        self.binary(left, right, 5, op.as_keyword(), true);
    }

    fn visit_list(&mut self, _whole: &Expr, elements: &[Expr]) {
        self.open("[", elements.is_empty());
        self.comma_list(elements);
        self.close("]", elements.is_empty());
    }

    fn visit_object(&mut self, entries: &[(String, Expr)]) {
        self.open("{", entries.is_empty());
        for (i, (key, value)) in entries.iter().enumerate() {
            if i > 0 {
                self.separator(",");
            }
            if is_bare_key(key) {
                self.emit(key);
            } else {
                let quoted = quote(key);
                self.emit(&quoted);
            }
            self.separator(":");
            walk(self, value);
        }
        self.close("}", entries.is_empty());
    }

    fn visit_function_call(&mut self, name: &str, args: &[Expr]) {
        self.emit(name);
        self.open("(", args.is_empty());
        self.comma_list(args);
        self.close(")", args.is_empty());
    }

    fn visit_duration(&mut self, parts: &[(i64, DurationUnit)]) {
        for (i, (amount, unit)) in parts.iter().enumerate() {
            if i > 0 {
                self.emitter.emit_space();
            }
            self.emit(&amount.to_string());
            self.emitter.emit_space();
            self.emit(unit.word_for(*amount));
        }
    }

    fn visit_relative_date(&mut self, duration: &Expr, direction: Direction) {
        // `(1 day) ago` does not parse, so the duration is never wrapped.
        walk(self, duration);
        self.emitter.emit_space();
        self.emit(direction.as_source());
    }
}
