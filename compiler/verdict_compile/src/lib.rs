//! Lowering from [`Expr`] to a flat [`Program`].
//!
//! The lowering is a post-order walk: operands are emitted before the
//! instruction that consumes them, so every operator finds its inputs on
//! top of the stack. It is pure and total; the same tree always yields the
//! same program, and no tree fails to lower.
//!
//! Two shapes are folded rather than lowered node by node:
//!
//! - identifier-rooted property chains (`user.address.city`) become a single
//!   `load "user.address.city"`, which the evaluator resolves against both
//!   flat dotted keys and nested maps;
//! - lists built only from constants become a single `lit [..]`.

use verdict_ir::{
    walk, ArithOp, CompareOp, Direction, DurationUnit, Expr, ExprVisitor, Instruction, Literal,
    MembershipOp, Program, UnaryOp, Value,
};

/// Lower an expression to a program.
pub fn lower(expr: &Expr) -> Program {
    let mut compiler = Compiler::default();
    walk(&mut compiler, expr);
    tracing::trace!(instructions = compiler.code.len(), "lowered expression");
    Program::new(compiler.code)
}

/// Instruction-emitting visitor.
#[derive(Default)]
struct Compiler {
    code: Vec<Instruction>,
}

impl Compiler {
    #[inline]
    fn emit(&mut self, instruction: Instruction) {
        self.code.push(instruction);
    }

    fn binary(&mut self, left: &Expr, right: &Expr, instruction: Instruction) {
        walk(self, left);
        walk(self, right);
        self.emit(instruction);
    }
}

impl ExprVisitor for Compiler {
    type Output = ();

    fn visit_literal(&mut self, literal: &Literal) {
        self.emit(Instruction::Lit(literal.to_value()));
    }

    fn visit_identifier(&mut self, name: &str) {
        self.emit(Instruction::Load(name.to_string()));
    }

    fn visit_property_access(&mut self, whole: &Expr, base: &Expr, name: &str) {
        if let Some(path) = whole.identifier_path() {
            self.emit(Instruction::Load(path));
        } else {
            walk(self, base);
            self.emit(Instruction::Access(name.to_string()));
        }
    }

    fn visit_bracket_access(&mut self, base: &Expr, key: &Expr) {
        self.binary(base, key, Instruction::BracketAccess);
    }

    fn visit_comparison(&mut self, op: CompareOp, left: &Expr, right: &Expr) {
        self.binary(left, right, Instruction::Compare(op));
    }

    fn visit_arithmetic(&mut self, op: ArithOp, left: &Expr, right: &Expr) {
        let instruction = match op {
            ArithOp::Add => Instruction::Add,
            ArithOp::Sub => Instruction::Subtract,
            ArithOp::Mul => Instruction::Multiply,
            ArithOp::Div => Instruction::Divide,
            ArithOp::Mod => Instruction::Modulo,
        };
        self.binary(left, right, instruction);
    }

    fn visit_unary(&mut self, op: UnaryOp, operand: &Expr) {
        walk(self, operand);
        self.emit(match op {
            UnaryOp::Minus => Instruction::UnaryMinus,
            UnaryOp::Bang => Instruction::UnaryBang,
        });
    }

    fn visit_logical_and(&mut self, left: &Expr, right: &Expr) {
        self.binary(left, right, Instruction::And);
    }

    fn visit_logical_or(&mut self, left: &Expr, right: &Expr) {
        self.binary(left, right, Instruction::Or);
    }

    fn visit_logical_not(&mut self, operand: &Expr) {
        walk(self, operand);
        self.emit(Instruction::Not);
    }

    fn visit_membership(&mut self, op: MembershipOp, left: &Expr, right: &Expr) {
        let instruction = match op {
            MembershipOp::In => Instruction::In,
            MembershipOp::Contains => Instruction::Contains,
        };
        self.binary(left, right, instruction);
    }

    fn visit_list(&mut self, whole: &Expr, elements: &[Expr]) {
        if let Some(constant) = whole.constant_value() {
            self.emit(Instruction::Lit(constant));
            return;
        }
        for element in elements {
            walk(self, element);
        }
        self.emit(Instruction::Array(elements.len()));
    }

    fn visit_object(&mut self, entries: &[(String, Expr)]) {
        for (key, value) in entries {
            self.emit(Instruction::Lit(Value::Str(key.clone())));
            walk(self, value);
        }
        self.emit(Instruction::Object(entries.len()));
    }

    fn visit_function_call(&mut self, name: &str, args: &[Expr]) {
        for arg in args {
            walk(self, arg);
        }
        self.emit(Instruction::Call {
            name: name.to_string(),
            argc: args.len(),
        });
    }

    fn visit_duration(&mut self, parts: &[(i64, DurationUnit)]) {
        self.emit(Instruction::Duration(parts.to_vec()));
    }

    fn visit_relative_date(&mut self, duration: &Expr, direction: Direction) {
        walk(self, duration);
        self.emit(Instruction::RelativeDate(direction));
    }
}

#[cfg(test)]
mod tests;
