//! Error recovery for the parser.
//!
//! Panic-mode synchronization: after an error inside a declaration, skip
//! to a likely statement boundary and resume.

use lox_ir::TokenKind;

use crate::cursor::Cursor;

/// A set of token kinds using bitset representation for O(1) membership testing.
///
/// Each bit corresponds to a `TokenKind::discriminant_index()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSet(u128);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    #[allow(clippy::needless_pass_by_value)] // const fn builder for static initialization
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u128 << kind.discriminant_index()))
    }

    #[inline]
    pub const fn contains(&self, kind: &TokenKind) -> bool {
        (self.0 & (1u128 << kind.discriminant_index())) != 0
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokens that begin a new declaration or statement.
pub const DECLARATION_START: TokenSet = TokenSet::new()
    .with(TokenKind::Class)
    .with(TokenKind::Fun)
    .with(TokenKind::Var)
    .with(TokenKind::For)
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Print)
    .with(TokenKind::Return);

/// Skip past the erroneous token, then up to the next statement boundary:
/// just after a `;`, or before a token in [`DECLARATION_START`], or at EOF.
pub fn synchronize(cursor: &mut Cursor<'_>) {
    cursor.advance();
    while !cursor.is_at_end() {
        if matches!(cursor.previous().kind, TokenKind::Semicolon) {
            return;
        }
        if DECLARATION_START.contains(cursor.current_kind()) {
            return;
        }
        cursor.advance();
    }
}
