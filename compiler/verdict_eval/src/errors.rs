//! Evaluation errors and their centralized constructors.
//!
//! Every failure the machine can raise is built by one of the `#[cold]`
//! functions below, so message wording lives in one place.

use std::fmt;

use verdict_ir::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Machine-readable cause of an [`EvaluationError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReasonCode {
    DivisionByZero,
    ModuloByZero,
    IntegerOverflow,
    ArityMismatch,
    StackUnderflow,
    UnbalancedStack,
    UnknownOpcode,
    UnknownFunction,
    FunctionError,
    FunctionPanicked,
    InvalidInstruction,
    DateOutOfRange,
}

impl ReasonCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ReasonCode::DivisionByZero => "division_by_zero",
            ReasonCode::ModuloByZero => "modulo_by_zero",
            ReasonCode::IntegerOverflow => "integer_overflow",
            ReasonCode::ArityMismatch => "arity_mismatch",
            ReasonCode::StackUnderflow => "stack_underflow",
            ReasonCode::UnbalancedStack => "unbalanced_stack",
            ReasonCode::UnknownOpcode => "unknown_opcode",
            ReasonCode::UnknownFunction => "unknown_function",
            ReasonCode::FunctionError => "function_error",
            ReasonCode::FunctionPanicked => "function_panicked",
            ReasonCode::InvalidInstruction => "invalid_instruction",
            ReasonCode::DateOutOfRange => "date_out_of_range",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operator received operands of the wrong type.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("cannot {operation} {got}: expected {expected}")]
pub struct TypeMismatchError {
    pub operation: String,
    pub expected: String,
    /// Kinds of the offending operands, e.g. `boolean and integer`.
    pub got: String,
    /// The offending operands.
    pub values: Vec<Value>,
}

/// A hard failure other than a type mismatch.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct EvaluationError {
    pub message: String,
    pub reason: ReasonCode,
    /// Opcode or function name that failed, when there is one.
    pub operation: Option<String>,
}

/// A `load` found nothing under strict variables.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("undefined variable '{variable}'")]
pub struct UndefinedVariableError {
    pub variable: String,
}

/// Any evaluation failure.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatchError),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    #[error(transparent)]
    UndefinedVariable(#[from] UndefinedVariableError),
}

impl EvalError {
    /// Reason code for [`EvalError::Evaluation`] failures.
    pub fn reason(&self) -> Option<ReasonCode> {
        match self {
            EvalError::Evaluation(e) => Some(e.reason),
            EvalError::TypeMismatch(_) | EvalError::UndefinedVariable(_) => None,
        }
    }
}

fn evaluation(reason: ReasonCode, operation: Option<&str>, message: String) -> EvalError {
    EvalError::Evaluation(EvaluationError {
        message,
        reason,
        operation: operation.map(str::to_string),
    })
}

fn kinds(values: &[&Value]) -> String {
    values
        .iter()
        .map(|v| v.type_name())
        .collect::<Vec<_>>()
        .join(" and ")
}

// Type Errors

/// Operands of `operation` have unsupported types.
#[cold]
pub fn type_mismatch(operation: &str, expected: &str, values: &[&Value]) -> EvalError {
    EvalError::TypeMismatch(TypeMismatchError {
        operation: operation.to_string(),
        expected: expected.to_string(),
        got: kinds(values),
        values: values.iter().map(|v| (*v).clone()).collect(),
    })
}

/// Bracket key that is neither a string nor an integer.
#[cold]
pub fn invalid_key(key: &Value) -> EvalError {
    type_mismatch("index with", "a string or integer key", &[key])
}

// Arithmetic Errors

#[cold]
pub fn division_by_zero() -> EvalError {
    evaluation(
        ReasonCode::DivisionByZero,
        Some("divide"),
        "division by zero".to_string(),
    )
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    evaluation(
        ReasonCode::ModuloByZero,
        Some("modulo"),
        "modulo by zero".to_string(),
    )
}

#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    evaluation(
        ReasonCode::IntegerOverflow,
        Some(operation),
        format!("integer overflow in {operation}"),
    )
}

#[cold]
pub fn date_out_of_range(operation: &str) -> EvalError {
    evaluation(
        ReasonCode::DateOutOfRange,
        Some(operation),
        format!("date out of range in {operation}"),
    )
}

// Function Errors

#[cold]
pub fn unknown_function(name: &str) -> EvalError {
    evaluation(
        ReasonCode::UnknownFunction,
        Some(name),
        format!("unknown function '{name}'"),
    )
}

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    let plural = if expected == 1 { "" } else { "s" };
    evaluation(
        ReasonCode::ArityMismatch,
        Some(name),
        format!("function '{name}' expects {expected} argument{plural}, got {got}"),
    )
}

#[cold]
pub fn function_error(name: &str, message: &str) -> EvalError {
    evaluation(
        ReasonCode::FunctionError,
        Some(name),
        format!("function '{name}' failed: {message}"),
    )
}

#[cold]
pub fn function_panicked(name: &str, payload: &str) -> EvalError {
    evaluation(
        ReasonCode::FunctionPanicked,
        Some(name),
        format!("function '{name}' panicked: {payload}"),
    )
}

// Machine Errors

#[cold]
pub fn stack_underflow(operation: &str, needed: usize, available: usize) -> EvalError {
    evaluation(
        ReasonCode::StackUnderflow,
        Some(operation),
        format!("stack underflow in '{operation}': needed {needed} operand(s), found {available}"),
    )
}

/// The program halted with nothing to return.
#[cold]
pub fn empty_result() -> EvalError {
    evaluation(
        ReasonCode::StackUnderflow,
        None,
        "program produced no result".to_string(),
    )
}

#[cold]
pub fn unbalanced_stack(depth: usize) -> EvalError {
    evaluation(
        ReasonCode::UnbalancedStack,
        None,
        format!("program left {depth} values on the stack, expected 1"),
    )
}

#[cold]
pub fn unknown_opcode(opcode: &str) -> EvalError {
    evaluation(
        ReasonCode::UnknownOpcode,
        Some(opcode),
        format!("unknown opcode '{opcode}'"),
    )
}

#[cold]
pub fn invalid_instruction(message: &str) -> EvalError {
    evaluation(
        ReasonCode::InvalidInstruction,
        None,
        format!("invalid instruction: {message}"),
    )
}

// Variable Errors

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::UndefinedVariable(UndefinedVariableError {
        variable: name.to_string(),
    })
}
