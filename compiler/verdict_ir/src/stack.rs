//! Stack growth for recursion over untrusted input.
//!
//! The parser and every AST visitor recurse once per nesting level. Source
//! text comes from users, so a long operator chain or deeply nested
//! parentheses must not overflow the thread stack. Recursive entry points
//! wrap themselves in [`ensure_sufficient_stack`].
//!
//! - **Red zone**: 64KB; if less than this remains, the stack grows
//! - **Growth size**: 1MB per segment

const RED_ZONE: usize = 64 * 1024;

const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if the remaining space is below the red zone.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
