//! Verdict evaluator.
//!
//! Executes a compiled [`Program`] against a read-only [`Context`] and an
//! injected [`FunctionTable`]. Programs hold no control flow, so evaluation
//! is a single forward pass over the instruction list.
//!
//! # Example
//!
//! ```text
//! let program = verdict_compile::lower(&expr);
//! let ctx = Context::new().with("score", 90i64);
//! let result = evaluate(&program, &ctx, &FunctionTable::with_builtins())?;
//! ```

mod context;
pub mod errors;
mod functions;
mod machine;
mod operators;

use verdict_ir::{Program, WireError};

pub use context::{Context, ContextError};
pub use errors::{
    EvalError, EvalResult, EvaluationError, ReasonCode, TypeMismatchError, UndefinedVariableError,
};
pub use functions::{FunctionEntry, FunctionTable, FunctionTableBuilder, NativeFn};
pub use machine::{EvalOptions, Evaluator, MachineState};

/// Evaluate with default options.
pub fn evaluate(program: &Program, context: &Context, functions: &FunctionTable) -> EvalResult {
    evaluate_with_options(program, context, functions, EvalOptions::default())
}

pub fn evaluate_with_options(
    program: &Program,
    context: &Context,
    functions: &FunctionTable,
    options: EvalOptions,
) -> EvalResult {
    let result = Evaluator::new(program, context, functions, options).run();
    tracing::debug!(
        instructions = program.len(),
        ok = result.is_ok(),
        "evaluated program"
    );
    result
}

/// Decode a wire-format program, reporting problems as evaluation errors
/// (`unknown_opcode`, `invalid_instruction`).
pub fn decode_program(json: &serde_json::Value) -> Result<Program, EvalError> {
    Program::from_json(json).map_err(|err| match &err {
        WireError::UnknownOpcode { opcode, .. } => errors::unknown_opcode(opcode),
        WireError::Malformed { .. } => errors::invalid_instruction(&err.to_string()),
    })
}

/// Decode and evaluate a wire-format program in one step.
pub fn evaluate_json(
    json: &serde_json::Value,
    context: &Context,
    functions: &FunctionTable,
    options: EvalOptions,
) -> EvalResult {
    let program = decode_program(json)?;
    evaluate_with_options(&program, context, functions, options)
}
