//! Runtime errors and control-flow signals.
//!
//! Errors are values: the interpreter fails fast by returning the first
//! `EvalError` up the call chain. `break`, `continue` and `return` are not
//! errors; they travel as [`Signal`]s.

use std::fmt;

use lox_diagnostic::{Diagnostic, ErrorCode};

use crate::value::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// Result of executing a statement.
pub type ExecResult = Result<Signal, EvalError>;

/// How a statement finished.
#[derive(Clone, Debug, PartialEq)]
pub enum Signal {
    Normal,
    Return { value: Value, line: u32 },
    Break { line: u32 },
    Continue { line: u32 },
}

/// Category of a runtime error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    TypeError { message: &'static str },
    DivisionByZero,
    UndefinedVariable { name: String },
    UninitializedVariable { name: String },
    NotCallable { type_name: &'static str },
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    ControlFlowOutsideLoop { keyword: &'static str },
    ReturnOutsideFunction,
    StackOverflow { depth: usize },
}

impl EvalErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::TypeError { .. } => ErrorCode::E6001,
            Self::DivisionByZero => ErrorCode::E6002,
            Self::UndefinedVariable { .. } => ErrorCode::E6003,
            Self::UninitializedVariable { .. } => ErrorCode::E6004,
            Self::NotCallable { .. } => ErrorCode::E6005,
            Self::ArityMismatch { .. } => ErrorCode::E6006,
            Self::ControlFlowOutsideLoop { .. } => ErrorCode::E6007,
            Self::ReturnOutsideFunction => ErrorCode::E6008,
            Self::StackOverflow { .. } => ErrorCode::E6009,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeError { message } => f.write_str(message),
            Self::DivisionByZero => f.write_str("division by zero"),
            Self::UndefinedVariable { name } => write!(f, "undefined variable '{name}'"),
            Self::UninitializedVariable { name } => {
                write!(f, "variable '{name}' used before initialization")
            }
            Self::NotCallable { type_name } => write!(f, "{type_name} is not callable"),
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "{name} expects {expected} {arg_word}, got {got}")
            }
            Self::ControlFlowOutsideLoop { keyword } => {
                write!(f, "'{keyword}' outside of a loop")
            }
            Self::ReturnOutsideFunction => f.write_str("'return' outside of a function"),
            Self::StackOverflow { depth } => {
                write!(f, "maximum recursion depth exceeded (limit: {depth})")
            }
        }
    }
}

/// One active call at the time an error was raised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    pub function: String,
    /// Line of the call expression.
    pub line: u32,
}

/// A runtime error with the line it was raised on.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Equals `kind.to_string()`.
    pub message: String,
    pub line: u32,
    /// Innermost call first.
    pub backtrace: Vec<BacktraceFrame>,
}

impl EvalError {
    pub fn from_kind(kind: EvalErrorKind, line: u32) -> Self {
        EvalError {
            message: kind.to_string(),
            kind,
            line,
            backtrace: Vec::new(),
        }
    }

    /// Record that the error passed through a call of `function` at `line`.
    #[must_use]
    pub fn with_frame(mut self, function: &str, line: u32) -> Self {
        self.backtrace.push(BacktraceFrame {
            function: function.to_string(),
            line,
        });
        self
    }

    pub fn error_code(&self) -> ErrorCode {
        self.kind.error_code()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.error_code())
            .with_message(self.message.clone())
            .with_line(self.line);
        for frame in &self.backtrace {
            diag = diag.with_note(format!(
                "in call to '{}' at line {}",
                frame.function, frame.line
            ));
        }
        diag
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] runtime error: {}", self.line, self.message)
    }
}

impl std::error::Error for EvalError {}

#[cold]
pub fn type_error(message: &'static str, line: u32) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeError { message }, line)
}

#[cold]
pub fn division_by_zero(line: u32) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero, line)
}

#[cold]
pub fn undefined_variable(name: &str, line: u32) -> EvalError {
    EvalError::from_kind(
        EvalErrorKind::UndefinedVariable {
            name: name.to_string(),
        },
        line,
    )
}

#[cold]
pub fn uninitialized_variable(name: &str, line: u32) -> EvalError {
    EvalError::from_kind(
        EvalErrorKind::UninitializedVariable {
            name: name.to_string(),
        },
        line,
    )
}

#[cold]
pub fn not_callable(type_name: &'static str, line: u32) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable { type_name }, line)
}

/// Wrong number of arguments in a call to `name`.
#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize, line: u32) -> EvalError {
    EvalError::from_kind(
        EvalErrorKind::ArityMismatch {
            name: name.to_string(),
            expected,
            got,
        },
        line,
    )
}

/// `break` or `continue` reached a function boundary or the top level.
#[cold]
pub fn control_flow_outside_loop(keyword: &'static str, line: u32) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ControlFlowOutsideLoop { keyword }, line)
}

#[cold]
pub fn return_outside_function(line: u32) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ReturnOutsideFunction, line)
}

#[cold]
pub fn stack_overflow(limit: usize, line: u32) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth: limit }, line)
}

/// Convert an escaped control signal into the matching error.
///
/// Returns `None` for `Normal` and `Return`, which callers handle themselves.
pub(crate) fn escaped_loop_signal(signal: &Signal) -> Option<EvalError> {
    match signal {
        Signal::Break { line } => Some(control_flow_outside_loop("break", *line)),
        Signal::Continue { line } => Some(control_flow_outside_loop("continue", *line)),
        Signal::Normal | Signal::Return { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn messages_match_kinds() {
        assert_eq!(division_by_zero(1).message, "division by zero");
        assert_eq!(
            undefined_variable("x", 1).message,
            "undefined variable 'x'"
        );
        assert_eq!(not_callable("string", 1).message, "string is not callable");
        assert_eq!(
            arity_mismatch("f", 1, 2, 1).message,
            "f expects 1 argument, got 2"
        );
        assert_eq!(
            arity_mismatch("g", 2, 0, 1).message,
            "g expects 2 arguments, got 0"
        );
        assert_eq!(
            control_flow_outside_loop("break", 1).message,
            "'break' outside of a loop"
        );
        assert_eq!(
            return_outside_function(1).message,
            "'return' outside of a function"
        );
        assert_eq!(
            stack_overflow(64, 1).message,
            "maximum recursion depth exceeded (limit: 64)"
        );
    }

    #[test]
    fn display_uses_runtime_error_format() {
        let err = type_error("operands must be numbers", 7);
        assert_eq!(err.to_string(), "[line 7] runtime error: operands must be numbers");
    }

    #[test]
    fn codes_are_in_runtime_range() {
        let errs = [
            type_error("operand must be a number", 1),
            division_by_zero(1),
            undefined_variable("a", 1),
            uninitialized_variable("a", 1),
            not_callable("nil", 1),
            arity_mismatch("f", 0, 1, 1),
            control_flow_outside_loop("continue", 1),
            return_outside_function(1),
            stack_overflow(1, 1),
        ];
        for err in &errs {
            assert!(err.error_code().is_eval_error(), "{err}");
        }
    }

    #[test]
    fn diagnostic_carries_backtrace_notes() {
        let err = division_by_zero(3)
            .with_frame("inner", 5)
            .with_frame("outer", 9);
        let diag = err.to_diagnostic();
        assert_eq!(diag.code, ErrorCode::E6002);
        assert_eq!(diag.line, Some(3));
        assert_eq!(
            diag.notes,
            vec![
                "in call to 'inner' at line 5".to_string(),
                "in call to 'outer' at line 9".to_string(),
            ]
        );
    }

    #[test]
    fn escaped_signals_become_errors() {
        let err = escaped_loop_signal(&Signal::Continue { line: 4 });
        assert_eq!(err.map(|e| e.line), Some(4));
        assert!(escaped_loop_signal(&Signal::Normal).is_none());
    }
}
