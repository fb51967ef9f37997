//! Grammar rules, split by syntactic category.
//!
//! - `stmt.rs`: declarations and statements, including `for` desugaring
//! - `expr.rs`: the expression precedence chain down to primaries

mod expr;
mod stmt;

/// Calls and function declarations accept at most this many arguments.
const MAX_ARGS: usize = 255;
