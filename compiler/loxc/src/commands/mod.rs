//! Command handlers for the `lox` CLI.
//!
//! Each handler returns `Result<(), DriverError>`; `main` maps the error to
//! a message and an exit status.

mod debug;
mod explain;
mod run;

use std::path::Path;

use crate::DriverError;

pub use debug::{format_ast, format_tokens, lex_file, parse_file};
pub use explain::{error_docs, explain_error};
pub use run::{repl, run_file, run_prompt};

/// Read a source file.
pub(crate) fn read_file(path: &str) -> Result<String, DriverError> {
    std::fs::read_to_string(path).map_err(|source| DriverError::ReadFile {
        path: Path::new(path).to_path_buf(),
        source,
    })
}
