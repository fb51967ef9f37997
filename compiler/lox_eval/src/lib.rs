//! Lox evaluator: values, environments and the tree-walking interpreter.
//!
//! Runtime errors fail fast: the first `EvalError` aborts `interpret`.
//! `break`, `continue` and `return` travel as [`Signal`] values and are
//! consumed by loops and call boundaries; one that escapes is itself a
//! runtime error.

mod environment;
mod errors;
mod interpreter;
mod natives;
mod operators;
mod print_handler;
mod value;

pub use environment::{AssignError, Environment, LocalScope, LookupError, Scope};
pub use errors::{BacktraceFrame, EvalError, EvalErrorKind, EvalResult, ExecResult, Signal};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use natives::NATIVES;
pub use operators::{evaluate_binary, evaluate_unary};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
pub use value::{NativeFn, NativeFunction, UserFunction, Value};

#[cfg(test)]
mod tests;
