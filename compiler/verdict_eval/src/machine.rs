//! The stack machine.
//!
//! An [`Evaluator`] executes one [`Program`] once. There are no jumps, so
//! the instruction pointer only moves forward and a program of length N
//! halts after at most N steps.

use chrono::{NaiveDateTime, Utc};
use smallvec::SmallVec;
use verdict_ir::{Duration, Instruction, MapKey, Program, Value};

use crate::errors::{
    empty_result, integer_overflow, invalid_instruction, stack_underflow, type_mismatch,
    unbalanced_stack, undefined_variable,
};
use crate::operators::{access, arithmetic, compare, dates, logical, membership};
use crate::{Context, EvalError, EvalResult, FunctionTable};

/// Per-evaluation settings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalOptions {
    /// Fail `load` of an absent variable instead of yielding `Undefined`.
    pub strict_variables: bool,
    /// Clock for relative dates; the system clock (UTC) when unset.
    pub now: Option<NaiveDateTime>,
}

impl EvalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_strict_variables(mut self, strict: bool) -> Self {
        self.strict_variables = strict;
        self
    }

    #[must_use]
    pub fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = Some(now);
        self
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MachineState {
    Running,
    Halted,
}

/// Execution state for a single evaluation.
pub struct Evaluator<'a> {
    instructions: &'a [Instruction],
    ip: usize,
    stack: Vec<Value>,
    context: &'a Context,
    functions: &'a FunctionTable,
    options: EvalOptions,
    /// Captured on first use so every relative date in one run agrees.
    now: Option<NaiveDateTime>,
    state: MachineState,
    steps: usize,
}

impl<'a> Evaluator<'a> {
    pub fn new(
        program: &'a Program,
        context: &'a Context,
        functions: &'a FunctionTable,
        options: EvalOptions,
    ) -> Self {
        let instructions = program.instructions();
        Evaluator {
            instructions,
            ip: 0,
            stack: Vec::with_capacity(instructions.len().min(64)),
            context,
            functions,
            options,
            now: options.now,
            state: if instructions.is_empty() {
                MachineState::Halted
            } else {
                MachineState::Running
            },
            steps: 0,
        }
    }

    pub fn state(&self) -> MachineState {
        self.state
    }

    pub fn instruction_pointer(&self) -> usize {
        self.ip
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn stack(&self) -> &[Value] {
        &self.stack
    }

    /// Execute one instruction. A hard failure halts the machine.
    pub fn step(&mut self) -> Result<MachineState, EvalError> {
        if self.state == MachineState::Halted {
            return Ok(MachineState::Halted);
        }
        let instructions = self.instructions;
        let Some(instruction) = instructions.get(self.ip) else {
            self.state = MachineState::Halted;
            return Ok(MachineState::Halted);
        };

        tracing::trace!(ip = self.ip, %instruction, depth = self.stack.len(), "step");
        if let Err(err) = self.execute(instruction) {
            tracing::debug!(ip = self.ip, opcode = %instruction.opcode(), error = %err, "evaluation failed");
            self.state = MachineState::Halted;
            return Err(err);
        }

        self.ip += 1;
        self.steps += 1;
        if self.ip == instructions.len() {
            self.state = MachineState::Halted;
        }
        Ok(self.state)
    }

    /// Run to completion and return the single value left on the stack.
    pub fn run(mut self) -> EvalResult {
        while self.step()? == MachineState::Running {}
        self.finish()
    }

    fn finish(mut self) -> EvalResult {
        match self.stack.len() {
            0 => Err(empty_result()),
            1 => self.stack.pop().ok_or_else(empty_result),
            depth => Err(unbalanced_stack(depth)),
        }
    }

    fn now(&mut self) -> NaiveDateTime {
        *self.now.get_or_insert_with(|| Utc::now().naive_utc())
    }

    fn push(&mut self, value: Value) {
        self.stack.push(value);
    }

    fn pop(&mut self, operation: &str) -> Result<Value, EvalError> {
        self.stack
            .pop()
            .ok_or_else(|| stack_underflow(operation, 1, 0))
    }

    /// Pop `(left, right)`, where `right` was pushed last.
    fn pop2(&mut self, operation: &str) -> Result<(Value, Value), EvalError> {
        if self.stack.len() < 2 {
            return Err(stack_underflow(operation, 2, self.stack.len()));
        }
        let right = self.pop(operation)?;
        let left = self.pop(operation)?;
        Ok((left, right))
    }

    /// Pop the top `n` values, oldest first.
    fn pop_n(&mut self, operation: &str, n: usize) -> Result<SmallVec<[Value; 4]>, EvalError> {
        let available = self.stack.len();
        let start = available
            .checked_sub(n)
            .ok_or_else(|| stack_underflow(operation, n, available))?;
        Ok(self.stack.drain(start..).collect())
    }

    fn execute(&mut self, instruction: &Instruction) -> Result<(), EvalError> {
        let op = instruction.opcode().name();
        let result = match instruction {
            Instruction::Lit(value) => value.clone(),
            Instruction::Load(name) => {
                let value = self.context.resolve(name);
                if self.options.strict_variables && value.is_undefined() {
                    return Err(undefined_variable(name));
                }
                value
            }
            Instruction::Access(name) => access::property(&self.pop(op)?, name),
            Instruction::BracketAccess => {
                let (base, key) = self.pop2(op)?;
                access::bracket(&base, &key)?
            }
            Instruction::Compare(cmp) => {
                let (a, b) = self.pop2(op)?;
                compare::compare(*cmp, &a, &b)
            }
            Instruction::Add => self.binary(op, arithmetic::add)?,
            Instruction::Subtract => self.binary(op, arithmetic::subtract)?,
            Instruction::Multiply => self.binary(op, arithmetic::multiply)?,
            Instruction::Divide => self.binary(op, arithmetic::divide)?,
            Instruction::Modulo => self.binary(op, arithmetic::modulo)?,
            Instruction::UnaryMinus => arithmetic::negate(&self.pop(op)?)?,
            Instruction::UnaryBang | Instruction::Not => logical::not(&self.pop(op)?)?,
            Instruction::And => self.binary(op, logical::and)?,
            Instruction::Or => self.binary(op, logical::or)?,
            Instruction::In => {
                let (item, collection) = self.pop2(op)?;
                membership::contains(&collection, &item)?
            }
            Instruction::Contains => {
                let (collection, item) = self.pop2(op)?;
                membership::contains(&collection, &item)?
            }
            Instruction::Array(n) => Value::List(self.pop_n(op, *n)?.into_vec()),
            Instruction::Object(n) => self.object(op, *n)?,
            Instruction::Call { name, argc } => {
                let args = self.pop_n(op, *argc)?;
                self.functions.call(name, &args, self.context)?
            }
            Instruction::Duration(parts) => Duration::from_parts(parts)
                .map(Value::Duration)
                .ok_or_else(|| integer_overflow("duration"))?,
            Instruction::RelativeDate(direction) => match self.pop(op)? {
                Value::Duration(d) => {
                    let now = self.now();
                    dates::relative(now, &d, *direction)?
                }
                Value::Undefined => Value::Undefined,
                other => {
                    return Err(type_mismatch(
                        "compute a relative date from",
                        "a duration",
                        &[&other],
                    ))
                }
            },
        };
        self.push(result);
        Ok(())
    }

    fn binary(
        &mut self,
        op: &str,
        f: fn(&Value, &Value) -> Result<Value, EvalError>,
    ) -> EvalResult {
        let (a, b) = self.pop2(op)?;
        f(&a, &b)
    }

    /// Pop `n` key/value pairs into a map; later duplicates win.
    fn object(&mut self, op: &str, n: usize) -> EvalResult {
        let len = n
            .checked_mul(2)
            .ok_or_else(|| invalid_instruction("object size overflows"))?;
        let flat = self.pop_n(op, len)?;
        let mut map = std::collections::BTreeMap::new();
        let mut items = flat.into_iter();
        while let (Some(key), Some(value)) = (items.next(), items.next()) {
            let key = match key {
                Value::Str(s) => MapKey::Str(s),
                Value::Int(i) => MapKey::Int(i),
                other => {
                    return Err(invalid_instruction(&format!(
                        "object key must be a string or integer, found {}",
                        other.type_name()
                    )))
                }
            };
            map.insert(key, value);
        }
        Ok(Value::Map(map))
    }
}
