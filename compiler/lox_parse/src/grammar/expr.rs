//! Expression parsing.
//!
//! One method per precedence level, lowest first:
//! assignment, `or`, `and`, equality, comparison, term, factor, unary, call.

use lox_diagnostic::ErrorCode;
use lox_ir::{BinaryOp, Expr, ExprId, ExprKind, Literal, LogicalOp, Span, TokenKind, UnaryOp};
use lox_stack::ensure_sufficient_stack;

use super::MAX_ARGS;
use crate::{ParseError, Parser};

fn equality_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::BangEqual => Some(BinaryOp::NotEq),
        TokenKind::EqualEqual => Some(BinaryOp::Eq),
        _ => None,
    }
}

fn comparison_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Greater => Some(BinaryOp::Gt),
        TokenKind::GreaterEqual => Some(BinaryOp::GtEq),
        TokenKind::Less => Some(BinaryOp::Lt),
        TokenKind::LessEqual => Some(BinaryOp::LtEq),
        _ => None,
    }
}

fn term_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        _ => None,
    }
}

fn factor_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` to prevent stack overflow
    /// on deeply nested expressions.
    pub(crate) fn expression(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.assignment())
    }

    /// IDENT "=" assignment | logicOr
    ///
    /// A non-variable target is reported but not fatal; the right-hand
    /// side stands in for the whole expression.
    fn assignment(&mut self) -> Result<ExprId, ParseError> {
        let target = self.logic_or()?;
        if !self.cursor.check(&TokenKind::Equal) {
            return Ok(target);
        }

        let equals = self.cursor.advance();
        let value = self.assignment()?;
        let target = self.arena.get_expr(target);
        if let ExprKind::Variable(name) = target.kind {
            let span = target.span.merge(self.arena.get_expr(value).span);
            let line = target.line;
            return Ok(self.alloc_expr(Expr::new(ExprKind::Assign { name, value }, span, line)));
        }

        let error = ParseError::at_token(
            equals,
            ErrorCode::E1003,
            "invalid assignment target",
            self.cursor.interner(),
        );
        self.report(error);
        Ok(value)
    }

    fn logic_or(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.logic_and()?;
        while self.cursor.check(&TokenKind::Or) {
            let op = self.cursor.advance();
            let right = self.logic_and()?;
            left = self.alloc_logical(LogicalOp::Or, left, right, op.line);
        }
        Ok(left)
    }

    fn logic_and(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.binary_level(0)?;
        while self.cursor.check(&TokenKind::And) {
            let op = self.cursor.advance();
            let right = self.binary_level(0)?;
            left = self.alloc_logical(LogicalOp::And, left, right, op.line);
        }
        Ok(left)
    }

    /// Left-associative binary levels: equality, comparison, term, factor.
    fn binary_level(&mut self, level: usize) -> Result<ExprId, ParseError> {
        const LEVELS: [fn(&TokenKind) -> Option<BinaryOp>; 4] =
            [equality_op, comparison_op, term_op, factor_op];

        let Some(op_for) = LEVELS.get(level) else {
            return self.unary();
        };
        let mut left = self.binary_level(level + 1)?;
        while let Some(op) = op_for(self.cursor.current_kind()) {
            let op_token = self.cursor.advance();
            let right = self.binary_level(level + 1)?;
            let span = self.expr_span(left).merge(self.expr_span(right));
            left = self.alloc_expr(Expr::new(
                ExprKind::Binary { op, left, right },
                span,
                op_token.line,
            ));
        }
        Ok(left)
    }

    /// ("!" | "-") unary | call
    fn unary(&mut self) -> Result<ExprId, ParseError> {
        let op = match self.cursor.current_kind() {
            TokenKind::Bang => UnaryOp::Not,
            TokenKind::Minus => UnaryOp::Neg,
            _ => return self.call(),
        };
        let op_token = self.cursor.advance();
        let operand = ensure_sufficient_stack(|| self.unary())?;
        let span = op_token.span.merge(self.expr_span(operand));
        Ok(self.alloc_expr(Expr::new(
            ExprKind::Unary { op, operand },
            span,
            op_token.line,
        )))
    }

    /// primary ( "(" args? ")" )*
    fn call(&mut self) -> Result<ExprId, ParseError> {
        let mut callee = self.primary()?;
        while self.cursor.eat(&TokenKind::LeftParen) {
            callee = self.finish_call(callee)?;
        }
        Ok(callee)
    }

    fn finish_call(&mut self, callee: ExprId) -> Result<ExprId, ParseError> {
        let mut args = Vec::new();
        if !self.cursor.check(&TokenKind::RightParen) {
            loop {
                if args.len() >= MAX_ARGS {
                    let error = self
                        .cursor
                        .error_at_current(ErrorCode::E1005, "can't have more than 255 arguments");
                    self.report(error);
                }
                args.push(self.expression()?);
                if !self.cursor.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        let paren = self
            .cursor
            .expect(&TokenKind::RightParen, "expected ')' after arguments")?;

        let args = self.arena.alloc_expr_list(args);
        let span = self.expr_span(callee).merge(paren.span);
        // Runtime call errors point at the closing paren.
        Ok(self.alloc_expr(Expr::new(ExprKind::Call { callee, args }, span, paren.line)))
    }

    /// NUMBER | STRING | "true" | "false" | "nil" | IDENT | "(" expression ")"
    fn primary(&mut self) -> Result<ExprId, ParseError> {
        let token = self.cursor.current();
        let kind = match token.kind {
            TokenKind::False => ExprKind::Literal(Literal::Bool(false)),
            TokenKind::True => ExprKind::Literal(Literal::Bool(true)),
            TokenKind::Nil => ExprKind::Literal(Literal::Nil),
            TokenKind::Number(n) => ExprKind::Literal(Literal::Number(n)),
            TokenKind::String(s) => ExprKind::Literal(Literal::String(s)),
            TokenKind::Ident(name) => ExprKind::Variable(name),
            TokenKind::LeftParen => {
                self.cursor.advance();
                let inner = self.expression()?;
                let close = self.cursor.expect(
                    &TokenKind::RightParen,
                    "expected enclosing ')' after expression",
                )?;
                let span = token.span.merge(close.span);
                return Ok(self.alloc_expr(Expr::new(ExprKind::Grouping(inner), span, token.line)));
            }
            _ => {
                return Err(self
                    .cursor
                    .error_at_current(ErrorCode::E1002, "expected expression"));
            }
        };
        self.cursor.advance();
        Ok(self.alloc_expr(Expr::new(kind, token.span, token.line)))
    }

    fn alloc_logical(&mut self, op: LogicalOp, left: ExprId, right: ExprId, line: u32) -> ExprId {
        let span = self.expr_span(left).merge(self.expr_span(right));
        self.alloc_expr(Expr::new(ExprKind::Logical { op, left, right }, span, line))
    }

    #[inline]
    fn expr_span(&self, id: ExprId) -> Span {
        self.arena.get_expr(id).span
    }
}
