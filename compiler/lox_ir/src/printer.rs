//! S-expression rendering of parsed programs, used by `lox parse`.
//!
//! ```text
//! print 1 + 2 * 3;        (print (+ 1 (* 2 3)))
//! var a;                  (var a)
//! fun f(x) { return x; }  (fun f (x) (return x))
//! ```

use std::fmt::Write;

use crate::ast::{ExprKind, Literal, StmtKind};
use crate::{ExprArena, ExprId, Program, StmtId, StmtRange, StringInterner};

/// Canonical text for a number: integral values print without a fraction.
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e16 {
        // Exactly integral and well inside the 2^53 mantissa.
        format!("{n:.0}")
    } else {
        format!("{n}")
    }
}

/// Renders AST nodes from one arena.
pub struct AstPrinter<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
}

impl<'a> AstPrinter<'a> {
    pub fn new(arena: &'a ExprArena, interner: &'a StringInterner) -> Self {
        AstPrinter { arena, interner }
    }

    /// One line per top-level statement.
    pub fn program(&self, program: &Program) -> String {
        let mut out = String::new();
        for &stmt in self.arena.get_stmt_list(program.statements) {
            out.push_str(&self.stmt(stmt));
            out.push('\n');
        }
        out
    }

    pub fn expr(&self, id: ExprId) -> String {
        let mut out = String::new();
        self.write_expr(&mut out, id);
        out
    }

    pub fn stmt(&self, id: StmtId) -> String {
        let mut out = String::new();
        self.write_stmt(&mut out, id);
        out
    }

    fn write_expr(&self, out: &mut String, id: ExprId) {
        match &self.arena.get_expr(id).kind {
            ExprKind::Literal(lit) => self.write_literal(out, *lit),
            ExprKind::Grouping(inner) => self.parens(out, "group", |p, out| {
                p.write_expr(out, *inner);
            }),
            ExprKind::Unary { op, operand } => self.parens(out, op.as_symbol(), |p, out| {
                p.write_expr(out, *operand);
            }),
            ExprKind::Binary { op, left, right } => {
                self.parens(out, op.as_symbol(), |p, out| {
                    p.write_expr(out, *left);
                    out.push(' ');
                    p.write_expr(out, *right);
                });
            }
            ExprKind::Logical { op, left, right } => {
                self.parens(out, op.as_symbol(), |p, out| {
                    p.write_expr(out, *left);
                    out.push(' ');
                    p.write_expr(out, *right);
                });
            }
            ExprKind::Variable(name) => out.push_str(self.interner.lookup(*name)),
            ExprKind::Assign { name, value } => self.parens(out, "=", |p, out| {
                out.push_str(p.interner.lookup(*name));
                out.push(' ');
                p.write_expr(out, *value);
            }),
            ExprKind::Call { callee, args } => self.parens(out, "call", |p, out| {
                p.write_expr(out, *callee);
                for &arg in p.arena.get_expr_list(*args) {
                    out.push(' ');
                    p.write_expr(out, arg);
                }
            }),
        }
    }

    fn write_literal(&self, out: &mut String, lit: Literal) {
        match lit {
            Literal::Nil => out.push_str("nil"),
            Literal::Bool(b) => {
                let _ = write!(out, "{b}");
            }
            Literal::Number(n) => out.push_str(&format_number(n)),
            Literal::String(s) => {
                let _ = write!(out, "\"{}\"", self.interner.lookup(s));
            }
        }
    }

    fn write_stmt(&self, out: &mut String, id: StmtId) {
        match &self.arena.get_stmt(id).kind {
            StmtKind::Expression(expr) => self.parens(out, "expr", |p, out| {
                p.write_expr(out, *expr);
            }),
            StmtKind::Print(expr) => self.parens(out, "print", |p, out| {
                p.write_expr(out, *expr);
            }),
            StmtKind::Var { name, initializer } => self.parens(out, "var", |p, out| {
                out.push_str(p.interner.lookup(*name));
                if let Some(init) = initializer {
                    out.push(' ');
                    p.write_expr(out, *init);
                }
            }),
            StmtKind::Block(body) => self.parens(out, "block", |p, out| {
                p.write_body(out, *body);
            }),
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => self.parens(out, "if", |p, out| {
                p.write_expr(out, *condition);
                out.push(' ');
                p.write_stmt(out, *then_branch);
                if let Some(else_branch) = else_branch {
                    out.push(' ');
                    p.write_stmt(out, *else_branch);
                }
            }),
            StmtKind::While { condition, body } => self.parens(out, "while", |p, out| {
                p.write_expr(out, *condition);
                out.push(' ');
                p.write_stmt(out, *body);
            }),
            StmtKind::Function(decl) => self.parens(out, "fun", |p, out| {
                out.push_str(p.interner.lookup(decl.name));
                out.push_str(" (");
                let params: Vec<&str> = p
                    .arena
                    .get_params(decl.params)
                    .iter()
                    .map(|param| p.interner.lookup(*param))
                    .collect();
                out.push_str(&params.join(" "));
                out.push(')');
                p.write_body(out, decl.body);
            }),
            StmtKind::Return(value) => self.parens(out, "return", |p, out| {
                if let Some(value) = value {
                    out.push(' ');
                    p.write_expr(out, *value);
                }
            }),
            StmtKind::Break => out.push_str("(break)"),
            StmtKind::Continue => out.push_str("(continue)"),
        }
    }

    fn write_body(&self, out: &mut String, body: StmtRange) {
        for &stmt in self.arena.get_stmt_list(body) {
            out.push(' ');
            self.write_stmt(out, stmt);
        }
    }

    /// `(head ...)`. Heads followed by an operand get a separating space
    /// from `inner`; bodies and optional parts add their own.
    fn parens(&self, out: &mut String, head: &str, inner: impl FnOnce(&Self, &mut String)) {
        out.push('(');
        out.push_str(head);
        let needs_space = !matches!(head, "block" | "return");
        if needs_space {
            out.push(' ');
        }
        inner(self, out);
        out.push(')');
    }
}
