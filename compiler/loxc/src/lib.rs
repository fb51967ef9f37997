//! Lox driver.
//!
//! Glues the phases together: source text is lexed and parsed by
//! [`parse_source`], then run by a [`Session`] whose interpreter keeps its
//! globals between runs (the prompt runs every line in one session).
//! Diagnostics from any phase are rendered through the emitter selected by
//! [`RunOptions`].

pub mod commands;
mod error;
mod options;
mod pipeline;
mod tracing_setup;

pub use error::DriverError;
pub use options::{parse_args, ErrorFormat, RunOptions};
pub use pipeline::{parse_source, ParsedProgram, Session};
pub use tracing_setup::init_tracing;
