//! Token types produced by the lexer.

use super::{Name, Span};
use std::fmt;
use std::ops::Index;

/// A classified lexeme.
///
/// `lexeme` is the exact source text, interned. `line` is the 1-based line
/// on which the token ends.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: Name,
    pub line: u32,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, lexeme: Name, line: u32, span: Span) -> Self {
        Token {
            kind,
            lexeme,
            line,
            span,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ line {} ({:?})", self.kind, self.line, self.span)
    }
}

/// Closed set of token kinds.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum TokenKind {
    // Single-character punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,
    Colon,
    Question,

    // One or two character operators
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Ident(Name),
    /// Raw contents between the quotes.
    String(Name),
    Number(f64),

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,
    Break,
    Continue,

    Eof,
}

impl TokenKind {
    pub const TAG_IDENT: u8 = 21;
    pub const TAG_EOF: u8 = 42;

    /// Dense index of the variant, ignoring payloads.
    ///
    /// Used by `TokenSet` bitsets in the parser; must stay below 128.
    pub const fn discriminant_index(&self) -> u8 {
        match self {
            TokenKind::LeftParen => 0,
            TokenKind::RightParen => 1,
            TokenKind::LeftBrace => 2,
            TokenKind::RightBrace => 3,
            TokenKind::Comma => 4,
            TokenKind::Dot => 5,
            TokenKind::Minus => 6,
            TokenKind::Plus => 7,
            TokenKind::Semicolon => 8,
            TokenKind::Slash => 9,
            TokenKind::Star => 10,
            TokenKind::Colon => 11,
            TokenKind::Question => 12,
            TokenKind::Bang => 13,
            TokenKind::BangEqual => 14,
            TokenKind::Equal => 15,
            TokenKind::EqualEqual => 16,
            TokenKind::Greater => 17,
            TokenKind::GreaterEqual => 18,
            TokenKind::Less => 19,
            TokenKind::LessEqual => 20,
            TokenKind::Ident(_) => Self::TAG_IDENT,
            TokenKind::String(_) => 22,
            TokenKind::Number(_) => 23,
            TokenKind::And => 24,
            TokenKind::Class => 25,
            TokenKind::Else => 26,
            TokenKind::False => 27,
            TokenKind::Fun => 28,
            TokenKind::For => 29,
            TokenKind::If => 30,
            TokenKind::Nil => 31,
            TokenKind::Or => 32,
            TokenKind::Print => 33,
            TokenKind::Return => 34,
            TokenKind::Super => 35,
            TokenKind::This => 36,
            TokenKind::True => 37,
            TokenKind::Var => 38,
            TokenKind::While => 39,
            TokenKind::Break => 40,
            TokenKind::Continue => 41,
            TokenKind::Eof => Self::TAG_EOF,
        }
    }

    /// Same variant, payload ignored.
    #[inline]
    pub fn same_kind(&self, other: &TokenKind) -> bool {
        self.discriminant_index() == other.discriminant_index()
    }

    /// Name used by `lox lex` output and token-level debugging.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Colon => "COLON",
            TokenKind::Question => "QUESTION",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Ident(_) => "IDENTIFIER",
            TokenKind::String(_) => "STRING",
            TokenKind::Number(_) => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::Fun => "FUN",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::Break => "BREAK",
            TokenKind::Continue => "CONTINUE",
            TokenKind::Eof => "EOF",
        }
    }
}

/// Lexer output: tokens in source order, ending with one `Eof`.
#[derive(Clone, Default, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
