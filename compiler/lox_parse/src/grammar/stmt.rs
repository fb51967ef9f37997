//! Declaration and statement parsing.

use lox_diagnostic::ErrorCode;
use lox_ir::{
    Expr, ExprKind, FunctionDecl, Literal, Name, Stmt, StmtId, StmtKind, Token, TokenKind,
};
use lox_stack::ensure_sufficient_stack;

use super::MAX_ARGS;
use crate::{synchronize, ParseError, Parser};

impl Parser<'_> {
    /// Parse one declaration, recovering on error.
    ///
    /// Returns `None` when the declaration was abandoned; the error is
    /// recorded and the cursor sits at the next statement boundary.
    pub(crate) fn declaration(&mut self) -> Option<StmtId> {
        match ensure_sufficient_stack(|| self.declaration_inner()) {
            Ok(stmt) => Some(stmt),
            Err(error) => {
                tracing::trace!(line = error.line, message = %error.message, "recovering");
                self.report(error);
                synchronize(&mut self.cursor);
                None
            }
        }
    }

    fn declaration_inner(&mut self) -> Result<StmtId, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Var => {
                let keyword = self.cursor.advance();
                self.var_declaration(keyword)
            }
            TokenKind::Fun => {
                let keyword = self.cursor.advance();
                self.function(keyword)
            }
            _ => self.statement(),
        }
    }

    /// "var" IDENT ("=" expression)? ";"
    fn var_declaration(&mut self, keyword: &Token) -> Result<StmtId, ParseError> {
        let name = self.cursor.expect_ident("expected variable name")?;
        let initializer = if self.cursor.eat(&TokenKind::Equal) {
            Some(self.expression()?)
        } else {
            None
        };
        self.cursor.expect(
            &TokenKind::Semicolon,
            "expected ';' after variable declaration",
        )?;
        Ok(self.finish_stmt(StmtKind::Var { name, initializer }, keyword))
    }

    /// "fun" IDENT "(" params? ")" block
    fn function(&mut self, keyword: &Token) -> Result<StmtId, ParseError> {
        let name = self.cursor.expect_ident("expected function name")?;
        self.cursor
            .expect(&TokenKind::LeftParen, "expected '(' after function name")?;

        let mut params: Vec<Name> = Vec::new();
        if !self.cursor.check(&TokenKind::RightParen) {
            loop {
                if params.len() >= MAX_ARGS {
                    let error = self.cursor.error_at_current(
                        ErrorCode::E1005,
                        "can't have more than 255 parameters",
                    );
                    self.report(error);
                }
                params.push(self.cursor.expect_ident("expected parameter name")?);
                if !self.cursor.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.cursor
            .expect(&TokenKind::RightParen, "expected ')' after parameters")?;
        self.cursor
            .expect(&TokenKind::LeftBrace, "expected '{' before function body")?;
        let body = self.block_body()?;

        let params = self.arena.alloc_params(params);
        let body = self.arena.alloc_stmt_list(body);
        Ok(self.finish_stmt(
            StmtKind::Function(FunctionDecl { name, params, body }),
            keyword,
        ))
    }

    fn statement(&mut self) -> Result<StmtId, ParseError> {
        ensure_sufficient_stack(|| self.statement_inner())
    }

    fn statement_inner(&mut self) -> Result<StmtId, ParseError> {
        let keyword = self.cursor.current();
        match keyword.kind {
            TokenKind::For => {
                self.cursor.advance();
                self.for_statement(keyword)
            }
            TokenKind::If => {
                self.cursor.advance();
                self.if_statement(keyword)
            }
            TokenKind::Print => {
                self.cursor.advance();
                let value = self.expression()?;
                self.cursor
                    .expect(&TokenKind::Semicolon, "expected ';' after value")?;
                Ok(self.finish_stmt(StmtKind::Print(value), keyword))
            }
            TokenKind::Return => {
                self.cursor.advance();
                let value = if self.cursor.check(&TokenKind::Semicolon) {
                    None
                } else {
                    Some(self.expression()?)
                };
                self.cursor
                    .expect(&TokenKind::Semicolon, "expected ';' after return value")?;
                Ok(self.finish_stmt(StmtKind::Return(value), keyword))
            }
            TokenKind::While => {
                self.cursor.advance();
                self.while_statement(keyword)
            }
            TokenKind::Break => {
                self.cursor.advance();
                self.cursor
                    .expect(&TokenKind::Semicolon, "expected ';' after 'break'")?;
                Ok(self.finish_stmt(StmtKind::Break, keyword))
            }
            TokenKind::Continue => {
                self.cursor.advance();
                self.cursor
                    .expect(&TokenKind::Semicolon, "expected ';' after 'continue'")?;
                Ok(self.finish_stmt(StmtKind::Continue, keyword))
            }
            TokenKind::LeftBrace => {
                self.cursor.advance();
                let body = self.block_body()?;
                let body = self.arena.alloc_stmt_list(body);
                Ok(self.finish_stmt(StmtKind::Block(body), keyword))
            }
            _ => self.expression_statement(),
        }
    }

    /// expression ";"
    fn expression_statement(&mut self) -> Result<StmtId, ParseError> {
        let expr = self.expression()?;
        let Expr { span, line, .. } = *self.arena.get_expr(expr);
        self.cursor
            .expect(&TokenKind::Semicolon, "expected ';' after expression")?;
        let span = self.span_from(span);
        Ok(self.alloc_stmt(Stmt::new(StmtKind::Expression(expr), span, line)))
    }

    /// Statements up to the closing brace. The `{` is already consumed.
    fn block_body(&mut self) -> Result<Vec<StmtId>, ParseError> {
        let mut statements = Vec::new();
        while !self.cursor.check(&TokenKind::RightBrace) && !self.cursor.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }
        self.cursor
            .expect(&TokenKind::RightBrace, "expected '}' after block")?;
        Ok(statements)
    }

    /// "if" "(" expression ")" statement ( "else" statement )?
    fn if_statement(&mut self, keyword: &Token) -> Result<StmtId, ParseError> {
        self.cursor
            .expect(&TokenKind::LeftParen, "expected '(' after 'if'")?;
        let condition = self.expression()?;
        self.cursor
            .expect(&TokenKind::RightParen, "expected ')' after if condition")?;
        let then_branch = self.statement()?;
        // The nearest `if` takes the `else`.
        let else_branch = if self.cursor.eat(&TokenKind::Else) {
            Some(self.statement()?)
        } else {
            None
        };
        Ok(self.finish_stmt(
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            },
            keyword,
        ))
    }

    /// "while" "(" expression ")" statement
    fn while_statement(&mut self, keyword: &Token) -> Result<StmtId, ParseError> {
        self.cursor
            .expect(&TokenKind::LeftParen, "expected '(' after while")?;
        let condition = self.expression()?;
        self.cursor
            .expect(&TokenKind::RightParen, "expected ')' after while condition")?;
        let body = self.statement()?;
        Ok(self.finish_stmt(StmtKind::While { condition, body }, keyword))
    }

    /// "for" "(" init cond? ";" incr? ")" statement
    ///
    /// Desugars to `{ init; while (cond) { body; incr; } }`. A missing
    /// condition becomes `true`. The outer block is always produced so the
    /// loop variable stays scoped to the loop.
    ///
    /// The increment is the last statement of the loop body, so `continue`
    /// skips it: `for (var i = 0; i < 3; i = i + 1) { if (i == 1) continue; }`
    /// never terminates.
    fn for_statement(&mut self, keyword: &Token) -> Result<StmtId, ParseError> {
        self.cursor
            .expect(&TokenKind::LeftParen, "expected '(' after 'for'")?;

        let initializer = match self.cursor.current_kind() {
            TokenKind::Semicolon => {
                self.cursor.advance();
                None
            }
            TokenKind::Var => {
                let var = self.cursor.advance();
                Some(self.var_declaration(var)?)
            }
            _ => Some(self.expression_statement()?),
        };

        let condition = if self.cursor.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        let condition_end = self
            .cursor
            .expect(&TokenKind::Semicolon, "expected ';' after for condition")?;

        let increment = if self.cursor.check(&TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.cursor
            .expect(&TokenKind::RightParen, "expected ')' after for clauses")?;

        let body = self.statement()?;
        let body_span = self.span_from(self.arena.get_stmt(body).span);

        let mut loop_body = vec![body];
        if let Some(increment) = increment {
            let Expr { span, line, .. } = *self.arena.get_expr(increment);
            loop_body.push(self.alloc_stmt(Stmt::new(StmtKind::Expression(increment), span, line)));
        }
        let loop_body = self.arena.alloc_stmt_list(loop_body);
        let loop_body = self.alloc_stmt(Stmt::new(StmtKind::Block(loop_body), body_span, keyword.line));

        let condition = condition.unwrap_or_else(|| {
            self.alloc_expr(Expr::new(
                ExprKind::Literal(Literal::Bool(true)),
                condition_end.span,
                condition_end.line,
            ))
        });
        let while_loop = self.finish_stmt(
            StmtKind::While {
                condition,
                body: loop_body,
            },
            keyword,
        );

        let outer: Vec<StmtId> = initializer.into_iter().chain([while_loop]).collect();
        let outer = self.arena.alloc_stmt_list(outer);
        Ok(self.finish_stmt(StmtKind::Block(outer), keyword))
    }

    /// Allocate a statement spanning from `start` to the last consumed token.
    fn finish_stmt(&mut self, kind: StmtKind, start: &Token) -> StmtId {
        let span = self.span_from(start.span);
        self.alloc_stmt(Stmt::new(kind, span, start.line))
    }
}
