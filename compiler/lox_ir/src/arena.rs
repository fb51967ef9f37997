//! Arena storage for one parsed program.
//!
//! All expressions, statements and list side tables live in contiguous
//! vectors. Child links are indices, so a parse result is a handful of
//! allocations regardless of program size.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use super::ast::{Expr, Stmt};
use super::{ExprId, ExprRange, Name, ParamRange, StmtId, StmtRange};

#[inline]
fn index_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("arena exceeds {} entries", u32::MAX))
}

/// Contiguous storage for every node of a parse.
#[derive(Clone, Default, PartialEq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
    /// Flattened call argument lists.
    expr_lists: Vec<ExprId>,
    /// Flattened block and function bodies.
    stmt_lists: Vec<StmtId>,
    /// Flattened parameter lists.
    params: Vec<Name>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for `token_count` tokens (~1 expression per 2 tokens).
    pub fn with_capacity(token_count: usize) -> Self {
        let estimated = token_count / 2;
        ExprArena {
            exprs: Vec::with_capacity(estimated),
            stmts: Vec::with_capacity(estimated / 3),
            expr_lists: Vec::with_capacity(estimated / 8),
            stmt_lists: Vec::with_capacity(estimated / 3),
            params: Vec::with_capacity(estimated / 16),
        }
    }

    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(index_u32(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    /// # Panics
    /// Panics if `id` did not come from this arena.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    #[inline]
    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(index_u32(self.stmts.len()));
        self.stmts.push(stmt);
        id
    }

    /// # Panics
    /// Panics if `id` did not come from this arena.
    #[inline]
    #[track_caller]
    pub fn get_stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = self.expr_lists.len();
        self.expr_lists.extend(exprs);
        ExprRange::new(index_u32(start), index_u32(self.expr_lists.len() - start))
    }

    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.to_range()]
    }

    pub fn alloc_stmt_list(&mut self, stmts: impl IntoIterator<Item = StmtId>) -> StmtRange {
        let start = self.stmt_lists.len();
        self.stmt_lists.extend(stmts);
        StmtRange::new(index_u32(start), index_u32(self.stmt_lists.len() - start))
    }

    #[inline]
    pub fn get_stmt_list(&self, range: StmtRange) -> &[StmtId] {
        &self.stmt_lists[range.to_range()]
    }

    pub fn alloc_params(&mut self, params: impl IntoIterator<Item = Name>) -> ParamRange {
        let start = self.params.len();
        self.params.extend(params);
        ParamRange::new(index_u32(start), index_u32(self.params.len() - start))
    }

    #[inline]
    pub fn get_params(&self, range: ParamRange) -> &[Name] {
        &self.params[range.to_range()]
    }
}

impl fmt::Debug for ExprArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExprArena")
            .field("exprs", &self.exprs.len())
            .field("stmts", &self.stmts.len())
            .finish_non_exhaustive()
    }
}

/// Shared, immutable handle to a finished arena.
///
/// Function values keep a clone so their bodies outlive the parse that
/// produced them (each REPL line is its own parse).
#[derive(Clone)]
pub struct SharedArena(Arc<ExprArena>);

impl SharedArena {
    pub fn new(arena: ExprArena) -> Self {
        SharedArena(Arc::new(arena))
    }
}

impl Deref for SharedArena {
    type Target = ExprArena;

    fn deref(&self) -> &ExprArena {
        &self.0
    }
}

impl fmt::Debug for SharedArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedArena").field(&*self.0).finish()
    }
}

/// Top-level statements of a parsed source, in order.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct Program {
    pub statements: StmtRange,
}
