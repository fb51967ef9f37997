//! Shared helpers for phase tests.

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_eval::{buffer_handler, SharedPrintHandler};
use loxc::{RunOptions, Session};

/// A session whose `print` output is captured.
pub struct Captured {
    pub session: Session,
    pub output: SharedPrintHandler,
}

impl Captured {
    pub fn new() -> Self {
        Self::with_options(&RunOptions::default())
    }

    pub fn with_options(options: &RunOptions) -> Self {
        let output = buffer_handler();
        Captured {
            session: Session::new(options, output.clone()),
            output,
        }
    }

    pub fn run(&mut self, source: &str) -> Result<(), Vec<Diagnostic>> {
        self.session.run(source)
    }

    pub fn output(&self) -> String {
        self.output.get_output()
    }
}

/// Run `source` in a fresh session and return everything it printed.
pub fn run_output(source: &str) -> String {
    let mut captured = Captured::new();
    let result = captured.run(source);
    assert!(result.is_ok(), "unexpected diagnostics: {result:?}");
    captured.output()
}

/// Run `source`, which must fail with exactly one diagnostic; return the
/// output printed before the failure and that diagnostic.
pub fn run_failure(source: &str) -> (String, Diagnostic) {
    let mut captured = Captured::new();
    let mut diagnostics = captured.run(source).expect_err("expected a failure");
    assert_eq!(diagnostics.len(), 1, "{diagnostics:?}");
    (captured.output(), diagnostics.remove(0))
}

/// Codes of `diagnostics`, in order.
pub fn codes(diagnostics: &[Diagnostic]) -> Vec<ErrorCode> {
    diagnostics.iter().map(|d| d.code).collect()
}
