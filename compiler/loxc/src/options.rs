//! Command-line configuration.

use std::io::IsTerminal;
use std::str::FromStr;

use lox_diagnostic::emitter::{ColorMode, DiagnosticEmitter, ShortEmitter, TerminalEmitter};
use lox_diagnostic::Diagnostic;

use crate::DriverError;

/// How diagnostics are rendered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ErrorFormat {
    /// `error[E1002]: ...` with a location line and notes.
    #[default]
    Human,
    /// One `[line N] error at 'x': ...` line per diagnostic.
    Short,
}

impl FromStr for ErrorFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(ErrorFormat::Human),
            "short" => Ok(ErrorFormat::Short),
            _ => Err(()),
        }
    }
}

/// Settings shared by every command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub color: ColorMode,
    pub error_format: ErrorFormat,
    /// Maximum number of active user-function calls; `None` is unbounded.
    pub max_call_depth: Option<usize>,
}

impl RunOptions {
    /// Emitter writing to stderr in the configured format.
    pub fn emitter(&self) -> Box<dyn DiagnosticEmitter> {
        match self.error_format {
            ErrorFormat::Human => Box::new(TerminalEmitter::stderr(
                self.color,
                std::io::stderr().is_terminal(),
            )),
            ErrorFormat::Short => Box::new(ShortEmitter::stderr()),
        }
    }

    /// Render `diagnostics` to stderr, followed by a summary.
    pub fn report(&self, diagnostics: &[Diagnostic]) {
        let mut emitter = self.emitter();
        emitter.emit_all(diagnostics);
        emitter.emit_summary(diagnostics.len());
        emitter.flush();
    }
}

/// Split `args` (without the program name) into options and positionals.
///
/// Flags may appear anywhere, as `--flag=value` or `--flag value`.
pub fn parse_args(args: &[String]) -> Result<(RunOptions, Vec<String>), DriverError> {
    let mut options = RunOptions::default();
    let mut positional = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let (flag, inline_value) = match arg.split_once('=') {
            Some((flag, value)) => (flag, Some(value.to_string())),
            None => (arg.as_str(), None),
        };
        let mut value = |name: &'static str| -> Result<String, DriverError> {
            inline_value
                .clone()
                .or_else(|| iter.next().cloned())
                .ok_or_else(|| DriverError::usage(format!("missing value for '{name}'")))
        };

        match flag {
            "--color" => {
                let raw = value("--color")?;
                options.color = raw.parse().map_err(|()| DriverError::InvalidFlag {
                    flag: "--color",
                    value: raw,
                    expected: "auto, always or never",
                })?;
            }
            "--error-format" => {
                let raw = value("--error-format")?;
                options.error_format = raw.parse().map_err(|()| DriverError::InvalidFlag {
                    flag: "--error-format",
                    value: raw,
                    expected: "human or short",
                })?;
            }
            "--max-call-depth" => {
                let raw = value("--max-call-depth")?;
                let depth = raw.parse::<usize>().ok().filter(|d| *d > 0);
                options.max_call_depth = Some(depth.ok_or(DriverError::InvalidFlag {
                    flag: "--max-call-depth",
                    value: raw,
                    expected: "a positive integer",
                })?);
            }
            _ => positional.push(arg.clone()),
        }
    }

    Ok((options, positional))
}
