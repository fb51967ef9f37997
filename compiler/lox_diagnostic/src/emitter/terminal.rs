//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//!
//! ```text
//! error[E1002]: expected expression
//!   --> line 3, at ';'
//!   = note: an expression must follow '='
//! ```

use std::io::{self, Write};

use crate::Diagnostic;

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Use colors when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(()),
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        if let Some(line) = diagnostic.line {
            let _ = write!(self.writer, "  ");
            self.write_colored("-->", colors::SECONDARY);
            let _ = write!(self.writer, " line {line}");
            if let Some(location) = &diagnostic.location {
                let _ = write!(self.writer, ", {location}");
            }
            let _ = writeln!(self.writer);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        if error_count == 0 {
            return;
        }
        self.write_colored("error", colors::ERROR);
        if error_count == 1 {
            let _ = writeln!(self.writer, ": aborting due to previous error");
        } else {
            let _ = writeln!(
                self.writer,
                ": aborting due to {error_count} previous errors"
            );
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use pretty_assertions::assert_eq;

    fn sample_diagnostic() -> Diagnostic {
        Diagnostic::error(ErrorCode::E1002)
            .with_message("expected expression")
            .with_line(3)
            .with_location("at ';'")
            .with_note("an expression must follow '='")
    }

    fn render(colors: ColorMode, f: impl FnOnce(&mut TerminalEmitter<&mut Vec<u8>>)) -> String {
        let mut output = Vec::new();
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, colors, false);
        f(&mut emitter);
        emitter.flush();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_terminal_emitter_no_color() {
        let text = render(ColorMode::Never, |e| e.emit(&sample_diagnostic()));
        assert_eq!(
            text,
            "error[E1002]: expected expression\n\
             \x20 --> line 3, at ';'\n\
             \x20 = note: an expression must follow '='\n\n"
        );
    }

    #[test]
    fn test_terminal_emitter_with_color() {
        let text = render(ColorMode::Always, |e| e.emit(&sample_diagnostic()));
        assert!(text.contains("\x1b["));
        assert!(text.contains("E1002"));
    }

    #[test]
    fn test_runtime_diagnostic_has_no_location() {
        let diag = Diagnostic::error(ErrorCode::E6002)
            .with_message("division by zero")
            .with_line(7);
        let text = render(ColorMode::Never, |e| e.emit(&diag));
        assert_eq!(text, "error[E6002]: division by zero\n  --> line 7\n\n");
    }

    #[test]
    fn test_summary() {
        let text = render(ColorMode::Never, |e| e.emit_summary(1));
        assert_eq!(text, "error: aborting due to previous error\n");

        let text = render(ColorMode::Never, |e| e.emit_summary(3));
        assert_eq!(text, "error: aborting due to 3 previous errors\n");

        let text = render(ColorMode::Never, |e| e.emit_summary(0));
        assert_eq!(text, "");
    }

    #[test]
    fn test_auto_mode_follows_tty() {
        assert!(ColorMode::Auto.should_use_colors(true));
        assert!(!ColorMode::Auto.should_use_colors(false));
        assert!(ColorMode::Always.should_use_colors(false));
        assert!(!ColorMode::Never.should_use_colors(true));
        assert_eq!("never".parse::<ColorMode>(), Ok(ColorMode::Never));
        assert!("sometimes".parse::<ColorMode>().is_err());
    }
}
