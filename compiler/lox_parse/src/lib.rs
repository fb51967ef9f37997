//! Recursive descent parser for Lox.
//!
//! Produces a flat AST in an `ExprArena`. Errors are collected with
//! panic-mode recovery so one run reports every independent mistake.

mod cursor;
mod error;
mod grammar;
mod recovery;

pub use cursor::Cursor;
pub use error::{ErrorLocation, ParseError};
pub use recovery::{synchronize, TokenSet, DECLARATION_START};

use lox_ir::{ExprArena, Expr, ExprId, Program, Span, Stmt, StmtId, StringInterner, TokenList};

/// Parse output: the program, the arena that owns its nodes, and every error.
///
/// A program with errors is partial and must not be executed.
#[derive(Debug)]
pub struct ParseOutput {
    pub program: Program,
    pub arena: ExprArena,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            arena: ExprArena::with_capacity(tokens.len()),
            errors: Vec::new(),
        }
    }

    /// program → declaration* EOF
    pub fn parse_program(mut self) -> ParseOutput {
        tracing::debug!("parsing program");
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }
        let program = Program {
            statements: self.arena.alloc_stmt_list(statements),
        };
        tracing::debug!(
            statements = program.statements.len(),
            exprs = self.arena.expr_count(),
            errors = self.errors.len(),
            "parsed program"
        );
        ParseOutput {
            program,
            arena: self.arena,
            errors: self.errors,
        }
    }

    /// Record an error without abandoning the current rule.
    fn report(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    /// Span from `start` through the last consumed token.
    fn span_from(&self, start: Span) -> Span {
        start.merge(self.cursor.previous().span)
    }

    #[inline]
    fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        self.arena.alloc_expr(expr)
    }

    #[inline]
    fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        self.arena.alloc_stmt(stmt)
    }
}

/// Parse a token list into a program.
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> ParseOutput {
    Parser::new(tokens, interner).parse_program()
}
