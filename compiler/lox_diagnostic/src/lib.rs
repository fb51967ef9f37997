//! Diagnostic system for Lox error reporting.
//!
//! Every phase reports through the same [`Diagnostic`] shape:
//! - an [`ErrorCode`] for `lox explain`
//! - a message saying what went wrong
//! - the 1-based line, and for lex/parse errors the offending lexeme
//!
//! Rendering is left to a [`DiagnosticEmitter`](emitter::DiagnosticEmitter).

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
