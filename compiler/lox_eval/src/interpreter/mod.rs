//! Tree-walking interpreter.
//!
//! Every `evaluate`/`execute` takes the arena holding the node and the
//! environment to run in; there is no hidden "current environment".
//! Recursion goes through `ensure_sufficient_stack` so deeply nested
//! programs grow the native stack instead of overflowing it.

mod builder;
mod function_call;

pub use builder::InterpreterBuilder;

use std::time::{Duration, Instant};

use lox_ir::{
    ExprId, ExprKind, Literal, LogicalOp, Name, Program, SharedArena, SharedInterner, StmtId,
    StmtKind, StmtRange,
};
use lox_stack::ensure_sufficient_stack;

use crate::environment::LookupError;
use crate::errors::{
    escaped_loop_signal, return_outside_function, undefined_variable, uninitialized_variable,
    EvalError, EvalResult, ExecResult, Signal,
};
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::{Environment, SharedPrintHandler, Value};

/// Executes parsed programs against a persistent global environment.
///
/// Globals survive across `interpret` calls, which is what the REPL relies on.
pub struct Interpreter {
    interner: SharedInterner,
    globals: Environment,
    print_handler: SharedPrintHandler,
    max_call_depth: Option<usize>,
    call_depth: usize,
    started: Instant,
}

impl Interpreter {
    /// Create an interpreter with default settings.
    pub fn new(interner: SharedInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    pub fn globals(&self) -> &Environment {
        &self.globals
    }

    /// Time since the interpreter was built.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Run every top-level statement in order, stopping at the first error.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn interpret(&mut self, program: &Program, arena: &SharedArena) -> Result<(), EvalError> {
        let result = self.run_top_level(program, arena);
        self.print_handler.flush();
        if let Err(err) = &result {
            tracing::debug!(code = %err.error_code(), line = err.line, "runtime error");
        }
        result
    }

    fn run_top_level(&mut self, program: &Program, arena: &SharedArena) -> Result<(), EvalError> {
        let globals = self.globals.clone();
        for &stmt in arena.get_stmt_list(program.statements) {
            let signal = self.execute(arena, stmt, &globals)?;
            if let Some(err) = escaped_loop_signal(&signal) {
                return Err(err);
            }
            if let Signal::Return { line, .. } = signal {
                return Err(return_outside_function(line));
            }
        }
        Ok(())
    }

    /// Evaluate an expression to a value.
    pub fn evaluate(&mut self, arena: &SharedArena, id: ExprId, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.evaluate_inner(arena, id, env))
    }

    fn evaluate_inner(&mut self, arena: &SharedArena, id: ExprId, env: &Environment) -> EvalResult {
        let expr = arena.get_expr(id);
        let line = expr.line;
        match &expr.kind {
            ExprKind::Literal(literal) => Ok(self.literal(*literal)),
            ExprKind::Grouping(inner) => self.evaluate(arena, *inner, env),
            ExprKind::Unary { op, operand } => {
                let value = self.evaluate(arena, *operand, env)?;
                evaluate_unary(*op, &value, line)
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.evaluate(arena, *left, env)?;
                let right = self.evaluate(arena, *right, env)?;
                evaluate_binary(*op, &left, &right, line)
            }
            ExprKind::Logical { op, left, right } => {
                let left = self.evaluate(arena, *left, env)?;
                let short_circuits = match op {
                    LogicalOp::Or => left.is_truthy(),
                    LogicalOp::And => !left.is_truthy(),
                };
                if short_circuits {
                    Ok(left)
                } else {
                    self.evaluate(arena, *right, env)
                }
            }
            ExprKind::Variable(name) => env
                .get(*name)
                .map_err(|err| self.lookup_error(err, *name, line)),
            ExprKind::Assign { name, value } => {
                let value = self.evaluate(arena, *value, env)?;
                env.assign(*name, value.clone())
                    .map_err(|_| undefined_variable(self.interner.lookup(*name), line))?;
                Ok(value)
            }
            ExprKind::Call { callee, args } => {
                let callee = self.evaluate(arena, *callee, env)?;
                let arg_ids = arena.get_expr_list(*args);
                let mut arg_values = Vec::with_capacity(arg_ids.len());
                for &arg in arg_ids {
                    arg_values.push(self.evaluate(arena, arg, env)?);
                }
                self.call(callee, arg_values, line)
            }
        }
    }

    fn literal(&self, literal: Literal) -> Value {
        match literal {
            Literal::Nil => Value::Nil,
            Literal::Bool(b) => Value::Bool(b),
            Literal::Number(n) => Value::Number(n),
            Literal::String(s) => Value::string(self.interner.lookup(s)),
        }
    }

    #[cold]
    fn lookup_error(&self, err: LookupError, name: Name, line: u32) -> EvalError {
        let name = self.interner.lookup(name);
        match err {
            LookupError::Undefined => undefined_variable(name, line),
            LookupError::Uninitialized => uninitialized_variable(name, line),
        }
    }

    /// Execute a statement, reporting how it finished.
    pub fn execute(&mut self, arena: &SharedArena, id: StmtId, env: &Environment) -> ExecResult {
        ensure_sufficient_stack(|| self.execute_inner(arena, id, env))
    }

    fn execute_inner(&mut self, arena: &SharedArena, id: StmtId, env: &Environment) -> ExecResult {
        let stmt = arena.get_stmt(id);
        match &stmt.kind {
            StmtKind::Expression(expr) => {
                self.evaluate(arena, *expr, env)?;
                Ok(Signal::Normal)
            }
            StmtKind::Print(expr) => {
                let value = self.evaluate(arena, *expr, env)?;
                self.print_handler.println(&value.to_string());
                Ok(Signal::Normal)
            }
            StmtKind::Var { name, initializer } => {
                match initializer {
                    Some(init) => {
                        let value = self.evaluate(arena, *init, env)?;
                        env.define(*name, value);
                    }
                    None => env.declare(*name),
                }
                Ok(Signal::Normal)
            }
            StmtKind::Block(body) => {
                tracing::trace!(line = stmt.line, "push scope");
                self.execute_block(arena, *body, &env.child())
            }
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(arena, *condition, env)?.is_truthy() {
                    self.execute(arena, *then_branch, env)
                } else if let Some(else_branch) = else_branch {
                    self.execute(arena, *else_branch, env)
                } else {
                    Ok(Signal::Normal)
                }
            }
            StmtKind::While { condition, body } => {
                while self.evaluate(arena, *condition, env)?.is_truthy() {
                    match self.execute(arena, *body, env)? {
                        Signal::Normal | Signal::Continue { .. } => {}
                        Signal::Break { .. } => break,
                        ret @ Signal::Return { .. } => return Ok(ret),
                    }
                }
                Ok(Signal::Normal)
            }
            StmtKind::Function(decl) => {
                self.declare_function(arena, decl, env);
                Ok(Signal::Normal)
            }
            StmtKind::Return(value) => {
                let value = match value {
                    Some(expr) => self.evaluate(arena, *expr, env)?,
                    None => Value::Nil,
                };
                Ok(Signal::Return {
                    value,
                    line: stmt.line,
                })
            }
            StmtKind::Break => Ok(Signal::Break { line: stmt.line }),
            StmtKind::Continue => Ok(Signal::Continue { line: stmt.line }),
        }
    }

    /// Run `body` directly in `env`, stopping at the first non-normal signal.
    pub(crate) fn execute_block(
        &mut self,
        arena: &SharedArena,
        body: StmtRange,
        env: &Environment,
    ) -> ExecResult {
        for &stmt in arena.get_stmt_list(body) {
            match self.execute(arena, stmt, env)? {
                Signal::Normal => {}
                signal => return Ok(signal),
            }
        }
        Ok(Signal::Normal)
    }
}
