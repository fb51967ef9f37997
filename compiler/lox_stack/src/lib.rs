//! Stack growth for deeply nested Lox programs.
//!
//! The parser descends once per nested expression and the interpreter
//! recurses once per nested expression, statement and call. A script such as
//! `((((...))))` or a deeply recursive `fun` would otherwise exhaust the
//! native stack long before the host runs out of memory.
//!
//! Wrap each recursive entry point with [`ensure_sufficient_stack`]:
//!
//! ```text
//! fn evaluate(&mut self, id: ExprId, env: &Environment) -> EvalResult {
//!     ensure_sufficient_stack(|| self.evaluate_inner(id, env))
//! }
//! ```
//!
//! On wasm32 the call is a plain passthrough.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly; wasm manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Current remaining stack in bytes, when the platform can report it.
///
/// Used by tracing output in the evaluator to show how close a run came to
/// growing the stack.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn remaining_stack() -> Option<usize> {
    stacker::remaining_stack()
}

/// Remaining stack is unknown on wasm.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn remaining_stack() -> Option<usize> {
    None
}
