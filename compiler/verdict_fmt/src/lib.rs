//! String visitor: turns an [`Expr`] back into canonical source text.
//!
//! The output re-parses to the same tree under [`Parenthesization::Minimal`]
//! and [`Parenthesization::Explicit`], for every [`Spacing`]:
//!
//! ```text
//! parse(decompile(parse(src))) == parse(src)
//! ```
//!
//! Operators use one canonical spelling (`AND`, `OR`, `NOT`, `IN`,
//! `CONTAINS`, `==`, `!=`, `===`, `!==`), so formatting also normalizes.

mod config;
mod emitter;
mod formatter;
mod literal;

use verdict_ir::{walk, Expr};

pub use config::{FormatConfig, Parenthesization, Spacing};
pub use emitter::{Emitter, StringEmitter};
pub use formatter::Formatter;

/// Format with the default configuration (minimal parentheses, normal spacing).
pub fn decompile(expr: &Expr) -> String {
    format_expr(expr, &FormatConfig::default())
}

/// Format with an explicit configuration.
pub fn format_expr(expr: &Expr, config: &FormatConfig) -> String {
    let mut formatter = Formatter::new(StringEmitter::new(), *config);
    walk(&mut formatter, expr);
    formatter.into_emitter().output()
}

#[cfg(test)]
mod tests;
