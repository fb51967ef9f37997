//! Short Emitter
//!
//! One line per diagnostic in the classic Lox layout:
//!
//! ```text
//! [line 1] error at 'x': expected ';' after value
//! [line 4] runtime error: division by zero
//! ```

use std::io::{self, Write};

use crate::Diagnostic;

use super::DiagnosticEmitter;

pub struct ShortEmitter<W: Write> {
    writer: W,
}

impl<W: Write> ShortEmitter<W> {
    pub fn new(writer: W) -> Self {
        ShortEmitter { writer }
    }
}

impl ShortEmitter<io::Stderr> {
    pub fn stderr() -> Self {
        ShortEmitter::new(io::stderr())
    }
}

impl<W: Write> DiagnosticEmitter for ShortEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        if let Some(line) = diagnostic.line {
            let _ = write!(self.writer, "[line {line}] ");
        }
        let kind = if diagnostic.code.is_eval_error() {
            "runtime error"
        } else {
            "error"
        };
        match &diagnostic.location {
            Some(location) => {
                let _ = writeln!(self.writer, "{kind} {location}: {}", diagnostic.message);
            }
            None => {
                let _ = writeln!(self.writer, "{kind}: {}", diagnostic.message);
            }
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    // One line per diagnostic is the whole report.
    fn emit_summary(&mut self, _error_count: usize) {}
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_short_format() {
        let diagnostics = vec![
            Diagnostic::error(ErrorCode::E1001)
                .with_message("expected ';' after value")
                .with_line(1)
                .with_location("at 'x'"),
            Diagnostic::error(ErrorCode::E1002)
                .with_message("expected expression")
                .with_line(2)
                .with_location("at end"),
            Diagnostic::error(ErrorCode::E6002)
                .with_message("division by zero")
                .with_line(4),
            Diagnostic::error(ErrorCode::E0002).with_message("unexpected character"),
        ];

        let mut output = Vec::new();
        let mut emitter = ShortEmitter::new(&mut output);
        emitter.emit_all(&diagnostics);
        emitter.emit_summary(4);
        emitter.flush();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "[line 1] error at 'x': expected ';' after value\n\
             [line 2] error at end: expected expression\n\
             [line 4] runtime error: division by zero\n\
             error: unexpected character\n"
        );
    }
}
