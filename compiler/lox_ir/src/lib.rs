//! Lox IR - shared data structures for the interpreter pipeline.
//!
//! - Spans for source locations
//! - Names for interned identifiers and string contents
//! - Tokens and `TokenList` for lexer output
//! - AST nodes (`Expr`, `Stmt`) stored flat in an `ExprArena`
//! - An S-expression printer for debugging parsed programs
//!
//! # Design
//!
//! - **Intern strings**: identifiers and literals become `Name(u32)`.
//! - **Flatten the tree**: children are `ExprId`/`StmtId` indices, lists are
//!   ranges into side tables of the arena. No `Box<Expr>`.

mod arena;
pub mod ast;
mod ids;
mod interner;
mod name;
pub mod printer;
mod span;
mod token;

pub use arena::{ExprArena, Program, SharedArena};
pub use ast::{BinaryOp, Expr, ExprKind, FunctionDecl, Literal, LogicalOp, Stmt, StmtKind, UnaryOp};
pub use ids::{ExprId, ExprRange, ParamRange, StmtId, StmtRange};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
