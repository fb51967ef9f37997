//! Raw Token Enum
//!
//! The logos-derived tokenizer output before interning. Strings and block
//! comments are scanned by callbacks so an unterminated one consumes the
//! rest of the input and surfaces as a single error.

use logos::{Lexer, Logos};

use crate::lex_error::LexErrorKind;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\x0C]+")] // Horizontal whitespace and form feed
pub(crate) enum RawToken {
    // === Trivia ===
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    #[token("\n")]
    Newline,

    // === Keywords ===
    #[token("and")]
    And,
    #[token("class")]
    Class,
    #[token("else")]
    Else,
    #[token("false")]
    False,
    #[token("for")]
    For,
    #[token("fun")]
    Fun,
    #[token("if")]
    If,
    #[token("nil")]
    Nil,
    #[token("or")]
    Or,
    #[token("print")]
    Print,
    #[token("return")]
    Return,
    #[token("super")]
    Super,
    #[token("this")]
    This,
    #[token("true")]
    True,
    #[token("var")]
    Var,
    #[token("while")]
    While,
    #[token("break")]
    Break,
    #[token("continue")]
    Continue,

    // === Punctuation ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token(";")]
    Semicolon,
    #[token("/")]
    Slash,
    #[token("*")]
    Star,
    #[token(":")]
    Colon,
    #[token("?")]
    Question,

    // === Operators ===
    #[token("!=")]
    BangEq,
    #[token("!")]
    Bang,
    #[token("==")]
    EqEq,
    #[token("=")]
    Eq,
    #[token(">=")]
    GtEq,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token("<")]
    Lt,

    // === Literals ===
    #[regex(r"[0-9]+", number)]
    Number(f64),

    #[token("\"", string)]
    String,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Extends an integer part with `.digits`, only when a digit follows the dot.
fn number(lex: &mut Lexer<RawToken>) -> Option<f64> {
    let rest = lex.remainder().as_bytes();
    if rest.first() == Some(&b'.') && rest.get(1).is_some_and(u8::is_ascii_digit) {
        let fraction = rest[1..].iter().take_while(|b| b.is_ascii_digit()).count();
        lex.bump(1 + fraction);
    }
    lex.slice().parse().ok()
}

/// Consumes up to and including the closing quote.
fn string(lex: &mut Lexer<RawToken>) -> Result<(), LexErrorKind> {
    let rest = lex.remainder();
    if let Some(end) = rest.find('"') {
        lex.bump(end + 1);
        Ok(())
    } else {
        lex.bump(rest.len());
        Err(LexErrorKind::UnterminatedString)
    }
}

/// Consumes up to and including the first `*/`. Comments do not nest.
fn block_comment(lex: &mut Lexer<RawToken>) -> Result<(), LexErrorKind> {
    let rest = lex.remainder();
    if let Some(end) = rest.find("*/") {
        lex.bump(end + 2);
        Ok(())
    } else {
        lex.bump(rest.len());
        Err(LexErrorKind::UnterminatedBlockComment)
    }
}
