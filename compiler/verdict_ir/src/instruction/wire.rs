//! JSON wire format for instructions.
//!
//! Each instruction is an array whose first element is the opcode name:
//!
//! ```text
//! ["load", "score"]
//! ["lit", 85]
//! ["compare", "GT"]
//! ["call", "Math.pow", 2]
//! ["duration", [[1, "days"], [2, "hours"]]]
//! ```

use serde_json::{json, Value as Json};

use super::{Instruction, Opcode};
use crate::{CompareOp, Direction, DurationUnit, Value};

/// Failure decoding a wire-format program.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    #[error("unknown opcode '{opcode}'{}", position(.index))]
    UnknownOpcode { opcode: String, index: Option<usize> },
    #[error("malformed instruction{}: {message}", position(.index))]
    Malformed {
        message: String,
        index: Option<usize>,
    },
}

fn position(index: &Option<usize>) -> String {
    index.map(|i| format!(" at index {i}")).unwrap_or_default()
}

impl WireError {
    #[cold]
    pub fn malformed(message: impl Into<String>) -> Self {
        WireError::Malformed {
            message: message.into(),
            index: None,
        }
    }

    #[cold]
    fn unknown_opcode(opcode: &str) -> Self {
        WireError::UnknownOpcode {
            opcode: opcode.to_string(),
            index: None,
        }
    }

    /// Attach the instruction index.
    #[must_use]
    pub fn at(self, at: usize) -> Self {
        match self {
            WireError::UnknownOpcode { opcode, .. } => WireError::UnknownOpcode {
                opcode,
                index: Some(at),
            },
            WireError::Malformed { message, .. } => WireError::Malformed {
                message,
                index: Some(at),
            },
        }
    }
}

pub(super) fn encode_instruction(instruction: &Instruction) -> Json {
    let name = instruction.opcode().name();
    match instruction {
        Instruction::Lit(value) => json!([name, value.to_json()]),
        Instruction::Load(path) | Instruction::Access(path) => json!([name, path]),
        Instruction::Compare(op) => json!([name, op.wire_name()]),
        Instruction::Array(n) | Instruction::Object(n) => json!([name, n]),
        Instruction::Call { name: function, argc } => json!([name, function, argc]),
        Instruction::Duration(parts) => {
            let pairs: Vec<Json> = parts
                .iter()
                .map(|(amount, unit)| json!([amount, unit.wire_name()]))
                .collect();
            json!([name, pairs])
        }
        Instruction::RelativeDate(direction) => json!([name, direction.wire_name()]),
        Instruction::BracketAccess
        | Instruction::Add
        | Instruction::Subtract
        | Instruction::Multiply
        | Instruction::Divide
        | Instruction::Modulo
        | Instruction::UnaryMinus
        | Instruction::UnaryBang
        | Instruction::And
        | Instruction::Or
        | Instruction::Not
        | Instruction::In
        | Instruction::Contains => json!([name]),
    }
}

pub(super) fn decode_instruction(json: &Json) -> Result<Instruction, WireError> {
    let items = json
        .as_array()
        .ok_or_else(|| WireError::malformed("instruction must be an array"))?;
    let (head, operands) = items
        .split_first()
        .ok_or_else(|| WireError::malformed("instruction is empty"))?;
    let name = head
        .as_str()
        .ok_or_else(|| WireError::malformed("opcode must be a string"))?;
    let opcode = Opcode::from_name(name).ok_or_else(|| WireError::unknown_opcode(name))?;

    let operands = Operands { opcode, operands };
    Ok(match opcode {
        Opcode::Lit => Instruction::Lit(Value::from_json(operands.single()?)?),
        Opcode::Load => Instruction::Load(operands.string(0)?.to_string()),
        Opcode::Access => Instruction::Access(operands.string(0)?.to_string()),
        Opcode::Compare => {
            let op = operands.string(0)?;
            Instruction::Compare(
                CompareOp::from_wire_name(op)
                    .ok_or_else(|| WireError::malformed(format!("unknown comparison '{op}'")))?,
            )
        }
        Opcode::Array => Instruction::Array(operands.count(0)?),
        Opcode::Object => Instruction::Object(operands.count(0)?),
        Opcode::Call => {
            operands.expect_len(2)?;
            Instruction::Call {
                name: operands.string(0)?.to_string(),
                argc: operands.count(1)?,
            }
        }
        Opcode::Duration => Instruction::Duration(decode_duration_parts(operands.single()?)?),
        Opcode::RelativeDate => {
            let direction = operands.string(0)?;
            Instruction::RelativeDate(
                Direction::from_wire_name(direction)
                    .ok_or_else(|| WireError::malformed(format!("unknown direction '{direction}'")))?,
            )
        }
        Opcode::BracketAccess => operands.none(Instruction::BracketAccess)?,
        Opcode::Add => operands.none(Instruction::Add)?,
        Opcode::Subtract => operands.none(Instruction::Subtract)?,
        Opcode::Multiply => operands.none(Instruction::Multiply)?,
        Opcode::Divide => operands.none(Instruction::Divide)?,
        Opcode::Modulo => operands.none(Instruction::Modulo)?,
        Opcode::UnaryMinus => operands.none(Instruction::UnaryMinus)?,
        Opcode::UnaryBang => operands.none(Instruction::UnaryBang)?,
        Opcode::And => operands.none(Instruction::And)?,
        Opcode::Or => operands.none(Instruction::Or)?,
        Opcode::Not => operands.none(Instruction::Not)?,
        Opcode::In => operands.none(Instruction::In)?,
        Opcode::Contains => operands.none(Instruction::Contains)?,
    })
}

/// Typed access to an instruction's operand list.
struct Operands<'a> {
    opcode: Opcode,
    operands: &'a [Json],
}

impl<'a> Operands<'a> {
    fn expect_len(&self, expected: usize) -> Result<(), WireError> {
        if self.operands.len() == expected {
            Ok(())
        } else {
            Err(WireError::malformed(format!(
                "'{}' takes {expected} operand(s), got {}",
                self.opcode,
                self.operands.len()
            )))
        }
    }

    fn none(&self, instruction: Instruction) -> Result<Instruction, WireError> {
        self.expect_len(0)?;
        Ok(instruction)
    }

    fn single(&self) -> Result<&'a Json, WireError> {
        self.expect_len(1)?;
        self.get(0)
    }

    fn get(&self, index: usize) -> Result<&'a Json, WireError> {
        self.operands.get(index).ok_or_else(|| {
            WireError::malformed(format!("'{}' is missing operand {index}", self.opcode))
        })
    }

    fn string(&self, index: usize) -> Result<&'a str, WireError> {
        if index == 0 && self.opcode != Opcode::Call {
            self.expect_len(1)?;
        }
        self.get(index)?.as_str().ok_or_else(|| {
            WireError::malformed(format!("'{}' operand {index} must be a string", self.opcode))
        })
    }

    fn count(&self, index: usize) -> Result<usize, WireError> {
        if index == 0 {
            self.expect_len(1)?;
        }
        self.get(index)?
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| {
                WireError::malformed(format!(
                    "'{}' operand {index} must be a non-negative integer",
                    self.opcode
                ))
            })
    }
}

fn decode_duration_parts(json: &Json) -> Result<Vec<(i64, DurationUnit)>, WireError> {
    let pairs = json
        .as_array()
        .ok_or_else(|| WireError::malformed("duration operand must be an array of pairs"))?;
    pairs
        .iter()
        .map(|pair| {
            let (amount, unit) = match pair.as_array().map(Vec::as_slice) {
                Some([amount, unit]) => (amount, unit),
                _ => return Err(WireError::malformed("duration part must be [amount, unit]")),
            };
            let amount = amount
                .as_i64()
                .ok_or_else(|| WireError::malformed("duration amount must be an integer"))?;
            let unit = unit
                .as_str()
                .and_then(DurationUnit::from_wire_name)
                .ok_or_else(|| WireError::malformed(format!("unknown duration unit {unit}")))?;
            Ok((amount, unit))
        })
        .collect()
}
