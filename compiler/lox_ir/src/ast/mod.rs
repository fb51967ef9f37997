//! AST node shapes.
//!
//! Expressions and statements are closed enums stored in an `ExprArena`;
//! children are referenced by id. Every node keeps its span and the 1-based
//! line used for runtime error locations.

mod operators;

pub use operators::{BinaryOp, LogicalOp, UnaryOp};

use crate::{ExprId, ExprRange, Name, ParamRange, Span, StmtId, StmtRange};

/// Literal values known at parse time.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Literal {
    Nil,
    Bool(bool),
    Number(f64),
    /// Raw string contents, interned.
    String(Name),
}

/// Expression node.
#[derive(Clone, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
    pub line: u32,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span, line: u32) -> Self {
        Expr { kind, span, line }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    Literal(Literal),
    Grouping(ExprId),
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    Logical {
        op: LogicalOp,
        left: ExprId,
        right: ExprId,
    },
    Variable(Name),
    Assign {
        name: Name,
        value: ExprId,
    },
    /// The owning `Expr`'s line is the closing paren's line.
    Call {
        callee: ExprId,
        args: ExprRange,
    },
}

/// Statement node.
#[derive(Clone, PartialEq, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
    pub line: u32,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span, line: u32) -> Self {
        Stmt { kind, span, line }
    }
}

/// A `fun` declaration.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FunctionDecl {
    pub name: Name,
    pub params: ParamRange,
    pub body: StmtRange,
}

#[derive(Clone, PartialEq, Debug)]
pub enum StmtKind {
    Expression(ExprId),
    Print(ExprId),
    Var {
        name: Name,
        initializer: Option<ExprId>,
    },
    Block(StmtRange),
    If {
        condition: ExprId,
        then_branch: StmtId,
        else_branch: Option<StmtId>,
    },
    While {
        condition: ExprId,
        body: StmtId,
    },
    Function(FunctionDecl),
    Return(Option<ExprId>),
    Break,
    Continue,
}
