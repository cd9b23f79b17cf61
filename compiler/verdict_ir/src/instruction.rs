//! Flat instruction set executed by the evaluator.
//!
//! There are no jumps: every instruction pops a fixed number of operands
//! (`array`, `object`, and `call` carry the count) and pushes exactly one
//! value, so a program of length N finishes in at most N steps.

mod wire;

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::{CompareOp, Direction, DurationUnit, Value};

pub use wire::WireError;

/// A single instruction.
#[derive(Clone, Debug, PartialEq)]
pub enum Instruction {
    /// Push a constant.
    Lit(Value),
    /// Resolve a variable or dotted path from the context.
    Load(String),
    /// Pop a base, push its named property.
    Access(String),
    /// Pop key and base, push `base[key]`.
    BracketAccess,
    Compare(CompareOp),
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    UnaryMinus,
    UnaryBang,
    And,
    Or,
    Not,
    /// Pop collection then item.
    In,
    /// Pop item then collection.
    Contains,
    /// Pop `n` values, push them as a list in source order.
    Array(usize),
    /// Pop `n` key/value pairs, push a map.
    Object(usize),
    /// Pop `argc` arguments, push the function result.
    Call { name: String, argc: usize },
    Duration(Vec<(i64, DurationUnit)>),
    /// Pop a duration, push a datetime relative to the evaluation clock.
    RelativeDate(Direction),
}

/// Opcode names, independent of operands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    Lit,
    Load,
    Access,
    BracketAccess,
    Compare,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    UnaryMinus,
    UnaryBang,
    And,
    Or,
    Not,
    In,
    Contains,
    Array,
    Object,
    Call,
    Duration,
    RelativeDate,
}

impl Opcode {
    const ALL: [Opcode; 22] = [
        Opcode::Lit,
        Opcode::Load,
        Opcode::Access,
        Opcode::BracketAccess,
        Opcode::Compare,
        Opcode::Add,
        Opcode::Subtract,
        Opcode::Multiply,
        Opcode::Divide,
        Opcode::Modulo,
        Opcode::UnaryMinus,
        Opcode::UnaryBang,
        Opcode::And,
        Opcode::Or,
        Opcode::Not,
        Opcode::In,
        Opcode::Contains,
        Opcode::Array,
        Opcode::Object,
        Opcode::Call,
        Opcode::Duration,
        Opcode::RelativeDate,
    ];

    /// Wire name: `lit`, `load`, `compare`, ...
    pub const fn name(self) -> &'static str {
        match self {
            Opcode::Lit => "lit",
            Opcode::Load => "load",
            Opcode::Access => "access",
            Opcode::BracketAccess => "bracket_access",
            Opcode::Compare => "compare",
            Opcode::Add => "add",
            Opcode::Subtract => "subtract",
            Opcode::Multiply => "multiply",
            Opcode::Divide => "divide",
            Opcode::Modulo => "modulo",
            Opcode::UnaryMinus => "unary_minus",
            Opcode::UnaryBang => "unary_bang",
            Opcode::And => "and",
            Opcode::Or => "or",
            Opcode::Not => "not",
            Opcode::In => "in",
            Opcode::Contains => "contains",
            Opcode::Array => "array",
            Opcode::Object => "object",
            Opcode::Call => "call",
            Opcode::Duration => "duration",
            Opcode::RelativeDate => "relative_date",
        }
    }

    pub fn from_name(name: &str) -> Option<Opcode> {
        Opcode::ALL.into_iter().find(|op| op.name() == name)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Instruction {
    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::Lit(_) => Opcode::Lit,
            Instruction::Load(_) => Opcode::Load,
            Instruction::Access(_) => Opcode::Access,
            Instruction::BracketAccess => Opcode::BracketAccess,
            Instruction::Compare(_) => Opcode::Compare,
            Instruction::Add => Opcode::Add,
            Instruction::Subtract => Opcode::Subtract,
            Instruction::Multiply => Opcode::Multiply,
            Instruction::Divide => Opcode::Divide,
            Instruction::Modulo => Opcode::Modulo,
            Instruction::UnaryMinus => Opcode::UnaryMinus,
            Instruction::UnaryBang => Opcode::UnaryBang,
            Instruction::And => Opcode::And,
            Instruction::Or => Opcode::Or,
            Instruction::Not => Opcode::Not,
            Instruction::In => Opcode::In,
            Instruction::Contains => Opcode::Contains,
            Instruction::Array(_) => Opcode::Array,
            Instruction::Object(_) => Opcode::Object,
            Instruction::Call { .. } => Opcode::Call,
            Instruction::Duration(_) => Opcode::Duration,
            Instruction::RelativeDate(_) => Opcode::RelativeDate,
        }
    }
}

/// `[opcode, operands...]` as compact JSON.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", wire::encode_instruction(self))
    }
}

/// An immutable, shareable instruction list.
///
/// Cloning is a reference-count bump; a single program may be evaluated
/// from any number of threads at once.
#[derive(Clone, PartialEq)]
pub struct Program {
    instructions: Arc<[Instruction]>,
}

impl Program {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Program {
            instructions: instructions.into(),
        }
    }

    #[inline]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Encode as the JSON wire format: an array of `[opcode, operands...]` arrays.
    pub fn to_json(&self) -> serde_json::Value {
        self.instructions.iter().map(wire::encode_instruction).collect()
    }

    /// Decode the JSON wire format.
    pub fn from_json(json: &serde_json::Value) -> Result<Program, WireError> {
        let items = json
            .as_array()
            .ok_or_else(|| WireError::malformed("program must be a JSON array"))?;
        let instructions = items
            .iter()
            .enumerate()
            .map(|(index, item)| wire::decode_instruction(item).map_err(|e| e.at(index)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Program::new(instructions))
    }

    /// Parse wire-format JSON text.
    pub fn from_json_str(text: &str) -> Result<Program, WireError> {
        let json: serde_json::Value =
            serde_json::from_str(text).map_err(|e| WireError::malformed(e.to_string()))?;
        Program::from_json(&json)
    }
}

impl Deref for Program {
    type Target = [Instruction];

    fn deref(&self) -> &[Instruction] {
        &self.instructions
    }
}

impl From<Vec<Instruction>> for Program {
    fn from(instructions: Vec<Instruction>) -> Self {
        Program::new(instructions)
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.instructions.iter()).finish()
    }
}

/// One instruction per line, for listings.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, instruction) in self.instructions.iter().enumerate() {
            writeln!(f, "{index:>4}  {instruction}")?;
        }
        Ok(())
    }
}
