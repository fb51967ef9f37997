//! Token Conversion
//!
//! Converts raw logos tokens to the final `TokenKind`, interning strings.
//! Trivia never reaches this point.

use lox_ir::{StringInterner, TokenKind};

use crate::raw_token::RawToken;

/// Returns `None` for trivia.
pub(crate) fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> Option<TokenKind> {
    let kind = match raw {
        RawToken::LineComment | RawToken::BlockComment | RawToken::Newline => return None,

        // Literals
        RawToken::Number(n) => TokenKind::Number(n),
        RawToken::String => {
            // Raw contents between the quotes, no escape processing.
            let content = &slice[1..slice.len() - 1];
            TokenKind::String(interner.intern(content))
        }
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),

        // Keywords
        RawToken::And => TokenKind::And,
        RawToken::Class => TokenKind::Class,
        RawToken::Else => TokenKind::Else,
        RawToken::False => TokenKind::False,
        RawToken::For => TokenKind::For,
        RawToken::Fun => TokenKind::Fun,
        RawToken::If => TokenKind::If,
        RawToken::Nil => TokenKind::Nil,
        RawToken::Or => TokenKind::Or,
        RawToken::Print => TokenKind::Print,
        RawToken::Return => TokenKind::Return,
        RawToken::Super => TokenKind::Super,
        RawToken::This => TokenKind::This,
        RawToken::True => TokenKind::True,
        RawToken::Var => TokenKind::Var,
        RawToken::While => TokenKind::While,
        RawToken::Break => TokenKind::Break,
        RawToken::Continue => TokenKind::Continue,

        // Punctuation
        RawToken::LParen => TokenKind::LeftParen,
        RawToken::RParen => TokenKind::RightParen,
        RawToken::LBrace => TokenKind::LeftBrace,
        RawToken::RBrace => TokenKind::RightBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Star => TokenKind::Star,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Question => TokenKind::Question,

        // Operators
        RawToken::BangEq => TokenKind::BangEqual,
        RawToken::Bang => TokenKind::Bang,
        RawToken::EqEq => TokenKind::EqualEqual,
        RawToken::Eq => TokenKind::Equal,
        RawToken::GtEq => TokenKind::GreaterEqual,
        RawToken::Gt => TokenKind::Greater,
        RawToken::LtEq => TokenKind::LessEqual,
        RawToken::Lt => TokenKind::Less,
    };
    Some(kind)
}
