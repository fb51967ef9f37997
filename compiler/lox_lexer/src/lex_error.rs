//! Lexer error types.

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::Span;
use std::borrow::Cow;
use std::fmt;

/// A lexical error. Scanning continues after every one of these.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    /// Line on which the offending text ends.
    pub line: u32,
    /// Source text the error covers.
    pub lexeme: String,
}

/// What went wrong.
///
/// `Default` is what logos reports for input no token pattern accepts.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    #[default]
    UnexpectedCharacter,
    /// Missing closing `"`; the rest of the input was consumed.
    UnterminatedString,
    /// Missing `*/`; the rest of the input was consumed.
    UnterminatedBlockComment,
}

impl LexErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            LexErrorKind::UnexpectedCharacter => "unexpected character",
            LexErrorKind::UnterminatedString => "unterminated string",
            LexErrorKind::UnterminatedBlockComment => "unterminated /**/ comment",
        }
    }

    pub fn code(self) -> ErrorCode {
        match self {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnexpectedCharacter => ErrorCode::E0002,
            LexErrorKind::UnterminatedBlockComment => ErrorCode::E0003,
        }
    }
}

impl LexError {
    /// `at 'x'` for a stray character. An unterminated string or comment
    /// runs to the end of input, so it is reported `at end`.
    pub fn location(&self) -> Cow<'static, str> {
        match self.kind {
            LexErrorKind::UnexpectedCharacter => format!("at '{}'", self.lexeme).into(),
            LexErrorKind::UnterminatedString | LexErrorKind::UnterminatedBlockComment => {
                "at end".into()
            }
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.kind.code())
            .with_message(self.kind.message())
            .with_line(self.line)
            .with_location(self.location())
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] error {}: {}",
            self.line,
            self.location(),
            self.kind.message()
        )
    }
}

impl std::error::Error for LexError {}
