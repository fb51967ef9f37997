//! The `run` command and the interactive prompt.

use std::io::{self, BufRead, Write};

use lox_eval::stdout_handler;

use super::read_file;
use crate::{DriverError, RunOptions, Session};

/// Run a script file, printing diagnostics if it fails.
pub fn run_file(path: &str, options: &RunOptions) -> Result<(), DriverError> {
    let source = read_file(path)?;
    let mut session = Session::new(options, stdout_handler());
    session.run(&source).map_err(|diagnostics| {
        options.report(&diagnostics);
        DriverError::Reported {
            count: diagnostics.len(),
        }
    })
}

/// Interactive prompt on stdin/stdout.
pub fn run_prompt(options: &RunOptions) -> Result<(), DriverError> {
    let mut session = Session::new(options, stdout_handler());
    let stdin = io::stdin();
    repl(&mut session, stdin.lock(), io::stdout(), options)
}

/// Read-eval-print loop over `input`, writing prompts to `prompt_out`.
///
/// Every line runs in the same session, so definitions carry over. Errors
/// are reported and the loop continues; it ends at end of input.
pub fn repl(
    session: &mut Session,
    mut input: impl BufRead,
    mut prompt_out: impl Write,
    options: &RunOptions,
) -> Result<(), DriverError> {
    let mut line = String::new();
    loop {
        write!(prompt_out, "> ")?;
        prompt_out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(prompt_out)?;
            return Ok(());
        }
        if let Err(diagnostics) = session.run(&line) {
            tracing::debug!(count = diagnostics.len(), "prompt line failed");
            options.report(&diagnostics);
        }
    }
}
