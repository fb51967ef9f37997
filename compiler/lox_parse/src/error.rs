//! Parse error types.

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::{Span, StringInterner, Token, TokenKind};
use std::fmt;

/// Where a parse error points: the offending lexeme, or the end of input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorLocation {
    AtLexeme(String),
    AtEnd,
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorLocation::AtLexeme(lexeme) => write!(f, "at '{lexeme}'"),
            ErrorLocation::AtEnd => write!(f, "at end"),
        }
    }
}

/// Parse error with the token it was reported at.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    pub line: u32,
    pub location: ErrorLocation,
}

impl ParseError {
    #[cold]
    pub fn at_token(
        token: &Token,
        code: ErrorCode,
        message: impl Into<String>,
        interner: &StringInterner,
    ) -> Self {
        let location = if matches!(token.kind, TokenKind::Eof) {
            ErrorLocation::AtEnd
        } else {
            ErrorLocation::AtLexeme(interner.lookup(token.lexeme).to_string())
        };
        ParseError {
            code,
            message: message.into(),
            span: token.span,
            line: token.line,
            location,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_line(self.line)
            .with_location(self.location.to_string())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] error {}: {}",
            self.line, self.location, self.message
        )
    }
}

impl std::error::Error for ParseError {}
