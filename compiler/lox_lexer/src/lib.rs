//! Lexer for Lox using logos with string interning.
//!
//! - Discards whitespace, `//` line comments and `/* */` block comments
//! - Interns identifiers, string contents and every lexeme
//! - Collects errors and keeps scanning; the token list always ends in `Eof`

mod convert;
mod lex_error;
mod raw_token;

use logos::Logos;
use lox_ir::{Name, Span, StringInterner, Token, TokenKind, TokenList};

use crate::convert::convert_token;
use crate::raw_token::RawToken;

pub use lex_error::{LexError, LexErrorKind};

/// Result of lexing one source text.
#[derive(Clone, Debug, Default)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex source code into a `TokenList`.
///
/// Never fails: unrecognized input becomes a [`LexError`] and scanning
/// resumes right after it.
///
/// # Panics
/// Panics if the source exceeds `u32::MAX` bytes.
pub fn lex(source: &str, interner: &StringInterner) -> LexOutput {
    let mut output = LexOutput {
        tokens: TokenList::with_capacity(source.len() / 2 + 1),
        errors: Vec::new(),
    };
    let bytes = source.as_bytes();
    let mut line: u32 = 1;
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let range = logos.span();
        // Strings and comments may span lines; the token sits on its last one.
        line += newlines_in(&bytes[range.clone()]);
        let span = Span::from_range(range);

        match token_result {
            Ok(raw) => {
                let slice = logos.slice();
                if let Some(kind) = convert_token(raw, slice, interner) {
                    output
                        .tokens
                        .push(Token::new(kind, interner.intern(slice), line, span));
                }
            }
            Err(kind) => output.errors.push(LexError {
                kind,
                span,
                line,
                lexeme: logos.slice().to_string(),
            }),
        }
    }

    let eof_pos = u32::try_from(source.len())
        .unwrap_or_else(|_| panic!("source file exceeds {} bytes", u32::MAX));
    output
        .tokens
        .push(Token::new(TokenKind::Eof, Name::EMPTY, line, Span::point(eof_pos)));

    tracing::debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        lines = line,
        "lexed source"
    );
    output
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "span lengths are bounded by the u32 source size check"
)]
fn newlines_in(bytes: &[u8]) -> u32 {
    bytes.iter().filter(|&&b| b == b'\n').count() as u32
}

#[cfg(test)]
mod tests;
