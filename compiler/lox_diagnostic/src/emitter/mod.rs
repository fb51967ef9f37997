//! Diagnostic Emitters
//!
//! - Terminal: colored, rustc-style output
//! - Short: one line per diagnostic, `[line N] error at 'x': message`

mod short;
mod terminal;

pub use short::ShortEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a closing summary after `error_count` errors.
    fn emit_summary(&mut self, error_count: usize);
}
