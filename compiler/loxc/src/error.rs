//! Driver-level failures.
//!
//! Lex, parse and runtime errors are diagnostics and are rendered where
//! they occur; by the time they reach the driver they are just
//! [`DriverError::Reported`].

use std::io;
use std::path::PathBuf;

use lox_diagnostic::ErrorCode;

/// Exit status for command-line misuse.
pub const EXIT_USAGE: i32 = 63;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("cannot read '{}': {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Usage(String),

    #[error("invalid value '{value}' for '{flag}' (expected {expected})")]
    InvalidFlag {
        flag: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("unknown error code '{0}' (codes look like E0001, E1002, E6003)")]
    UnknownErrorCode(String),

    #[error("no documentation available for {0}")]
    NoDocs(ErrorCode),

    /// The program had errors; they were already printed.
    #[error("aborting due to {count} error(s)")]
    Reported { count: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl DriverError {
    pub fn usage(message: impl Into<String>) -> Self {
        DriverError::Usage(message.into())
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::Usage(_) | DriverError::InvalidFlag { .. } => EXIT_USAGE,
            _ => 1,
        }
    }
}
