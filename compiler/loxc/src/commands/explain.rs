//! The `explain` command: documentation for error codes.

use lox_diagnostic::{ErrorCode, ErrorDocs};

use crate::DriverError;

/// Documentation for `code_str` (case-insensitive, e.g. `e6002`).
pub fn error_docs(code_str: &str) -> Result<&'static str, DriverError> {
    let code = code_str
        .parse::<ErrorCode>()
        .map_err(|()| DriverError::UnknownErrorCode(code_str.to_string()))?;
    ErrorDocs::get(code).ok_or(DriverError::NoDocs(code))
}

/// Print the documentation for an error code.
pub fn explain_error(code_str: &str) -> Result<(), DriverError> {
    let doc = error_docs(code_str)?;
    println!("{doc}");
    Ok(())
}
