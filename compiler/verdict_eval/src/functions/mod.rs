//! The injected function table.
//!
//! Programs can only call what the caller registered. The table is built
//! once, is immutable afterwards, and is shared by reference across any
//! number of concurrent evaluations.

mod builtins;

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use rustc_hash::FxHashMap;
use verdict_ir::Value;

use crate::errors::{arity_mismatch, function_error, function_panicked, unknown_function};
use crate::{Context, EvalResult};

/// Host function implementation.
///
/// Receives the arguments in source order and the evaluation context.
/// `Err(message)` is reported as a `function_error`.
pub type NativeFn = Arc<dyn Fn(&[Value], &Context) -> Result<Value, String> + Send + Sync>;

/// A registered function: fixed arity plus implementation.
#[derive(Clone)]
pub struct FunctionEntry {
    arity: usize,
    implementation: NativeFn,
}

impl FunctionEntry {
    pub fn new(arity: usize, implementation: NativeFn) -> Self {
        FunctionEntry {
            arity,
            implementation,
        }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }
}

impl fmt::Debug for FunctionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionEntry")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Immutable name → function mapping. Names may be dotted (`Math.pow`).
#[derive(Clone, Debug, Default)]
pub struct FunctionTable {
    entries: FxHashMap<String, FunctionEntry>,
}

impl FunctionTable {
    pub fn builder() -> FunctionTableBuilder {
        FunctionTableBuilder::default()
    }

    /// A table holding only the shipped built-ins.
    pub fn with_builtins() -> Self {
        Self::builder().with_builtins().build()
    }

    pub fn get(&self, name: &str) -> Option<&FunctionEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Look up `name`, check arity, and run it with panics contained.
    pub fn call(&self, name: &str, args: &[Value], context: &Context) -> EvalResult {
        let entry = self.get(name).ok_or_else(|| unknown_function(name))?;
        if args.len() != entry.arity {
            return Err(arity_mismatch(name, entry.arity, args.len()));
        }

        let outcome = catch_unwind(AssertUnwindSafe(|| {
            (entry.implementation)(args, context)
        }));
        match outcome {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(message)) => Err(function_error(name, &message)),
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| (*s).to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic payload".to_string());
                tracing::debug!(function = name, %message, "function panicked");
                Err(function_panicked(name, &message))
            }
        }
    }
}

/// Builder for [`FunctionTable`].
///
/// Registrations made with [`function`](Self::function) replace any earlier
/// entry of the same name; [`with_builtins`](Self::with_builtins) only fills
/// names that are still free, so built-ins never shadow the caller.
#[derive(Default)]
pub struct FunctionTableBuilder {
    entries: FxHashMap<String, FunctionEntry>,
}

impl FunctionTableBuilder {
    #[must_use]
    pub fn function<F>(mut self, name: impl Into<String>, arity: usize, f: F) -> Self
    where
        F: Fn(&[Value], &Context) -> Result<Value, String> + Send + Sync + 'static,
    {
        self.entries
            .insert(name.into(), FunctionEntry::new(arity, Arc::new(f)));
        self
    }

    #[must_use]
    pub fn with_builtins(mut self) -> Self {
        for (name, arity, f) in builtins::BUILTINS {
            self.entries
                .entry((*name).to_string())
                .or_insert_with(|| FunctionEntry::new(*arity, Arc::new(*f)));
        }
        self
    }

    pub fn build(self) -> FunctionTable {
        FunctionTable {
            entries: self.entries,
        }
    }
}
