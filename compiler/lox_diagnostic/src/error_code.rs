//! Error codes for all interpreter diagnostics.
//!
//! The first digit is the phase, matching the `lox explain` docs.

use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where the first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Runtime errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unexpected character in source
    E0002,
    /// Unterminated block comment
    E0003,

    // Parser Errors (E1xxx)
    /// Expected a specific token
    E1001,
    /// Expected expression
    E1002,
    /// Invalid assignment target
    E1003,
    /// Expected identifier
    E1004,
    /// Too many arguments or parameters
    E1005,

    // Runtime Errors (E6xxx)
    /// Operand type error
    E6001,
    /// Division by zero
    E6002,
    /// Undefined variable
    E6003,
    /// Read of an uninitialized variable
    E6004,
    /// Called a value that is not callable
    E6005,
    /// Wrong number of arguments
    E6006,
    /// `break`/`continue` outside of a loop
    E6007,
    /// `return` outside of a function
    E6008,
    /// Maximum recursion depth exceeded
    E6009,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6005,
        ErrorCode::E6006,
        ErrorCode::E6007,
        ErrorCode::E6008,
        ErrorCode::E6009,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            // Parser
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            // Runtime
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6008 => "E6008",
            ErrorCode::E6009 => "E6009",
        }
    }

    /// One-line summary, shown when no long-form doc is wanted.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "unexpected character in source",
            ErrorCode::E0003 => "unterminated block comment",
            ErrorCode::E1001 => "expected a specific token",
            ErrorCode::E1002 => "expected an expression",
            ErrorCode::E1003 => "invalid assignment target",
            ErrorCode::E1004 => "expected an identifier",
            ErrorCode::E1005 => "too many arguments or parameters",
            ErrorCode::E6001 => "operand has the wrong type",
            ErrorCode::E6002 => "division by zero",
            ErrorCode::E6003 => "undefined variable",
            ErrorCode::E6004 => "variable read before initialization",
            ErrorCode::E6005 => "value is not callable",
            ErrorCode::E6006 => "wrong number of arguments",
            ErrorCode::E6007 => "'break' or 'continue' outside of a loop",
            ErrorCode::E6008 => "'return' outside of a function",
            ErrorCode::E6009 => "maximum recursion depth exceeded",
        }
    }

    /// Check if this is a lexer error (E0xxx range).
    pub fn is_lexer_error(&self) -> bool {
        matches!(self, ErrorCode::E0001 | ErrorCode::E0002 | ErrorCode::E0003)
    }

    /// Check if this is a parser error (E1xxx range).
    pub fn is_parser_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001
                | ErrorCode::E1002
                | ErrorCode::E1003
                | ErrorCode::E1004
                | ErrorCode::E1005
        )
    }

    /// Check if this is a runtime error (E6xxx range).
    pub fn is_eval_error(&self) -> bool {
        !self.is_lexer_error() && !self.is_parser_error()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E6002"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
