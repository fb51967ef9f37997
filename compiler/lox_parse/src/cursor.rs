//! Token cursor for navigating the token stream.

use lox_diagnostic::ErrorCode;
use lox_ir::{Name, StringInterner, Token, TokenKind, TokenList};

use crate::ParseError;

/// Cursor over a token list that always ends in `Eof`.
///
/// The position never moves past `Eof`, so `current()` is always valid.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        debug_assert!(
            matches!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof)),
            "token list must end with Eof"
        );
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    /// The most recently consumed token, or the first token before any.
    #[inline]
    pub fn previous(&self) -> &'a Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Same kind as `kind`, ignoring any literal payload.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind().same_kind(kind)
    }

    /// Consume and return the current token. Stays put on `Eof`.
    #[inline]
    pub fn advance(&mut self) -> &'a Token {
        let current = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        current
    }

    /// Consume the current token if it has the given kind.
    #[inline]
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn expect(&mut self, kind: &TokenKind, message: &str) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_at_current(ErrorCode::E1001, message))
        }
    }

    /// Expect and consume an identifier, returning its interned name.
    #[inline]
    pub fn expect_ident(&mut self, message: &str) -> Result<Name, ParseError> {
        if let TokenKind::Ident(name) = *self.current_kind() {
            self.advance();
            Ok(name)
        } else {
            Err(self.error_at_current(ErrorCode::E1004, message))
        }
    }

    #[cold]
    #[inline(never)]
    pub fn error_at_current(&self, code: ErrorCode, message: &str) -> ParseError {
        ParseError::at_token(self.current(), code, message, self.interner)
    }
}
