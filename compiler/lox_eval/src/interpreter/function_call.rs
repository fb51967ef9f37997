//! Function declaration and call dispatch.

use std::rc::Rc;

use lox_ir::{FunctionDecl, SharedArena};

use super::Interpreter;
use crate::errors::{
    arity_mismatch, escaped_loop_signal, not_callable, stack_overflow, EvalResult, Signal,
};
use crate::value::{NativeFunction, UserFunction, Value};
use crate::Environment;

impl Interpreter {
    /// Bind a function value for `decl` in `env`, closing over `env`.
    ///
    /// The function is defined after it captures `env`, so it can call
    /// itself by name.
    pub(super) fn declare_function(
        &mut self,
        arena: &SharedArena,
        decl: &FunctionDecl,
        env: &Environment,
    ) {
        let function = UserFunction {
            name: self.interner.lookup(decl.name),
            params: decl.params,
            body: decl.body,
            arena: arena.clone(),
            closure: env.clone(),
        };
        env.define(decl.name, Value::Function(Rc::new(function)));
    }

    /// Call `callee` with already-evaluated arguments. `line` is the line of
    /// the call's closing paren.
    pub fn call(&mut self, callee: Value, args: Vec<Value>, line: u32) -> EvalResult {
        match callee {
            Value::Function(function) => self.call_function(&function, args, line),
            Value::Native(native) => self.call_native(native, &args, line),
            other => Err(not_callable(other.type_name(), line)),
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(function = function.name))]
    fn call_function(&mut self, function: &UserFunction, args: Vec<Value>, line: u32) -> EvalResult {
        if args.len() != function.arity() {
            return Err(arity_mismatch(
                function.name,
                function.arity(),
                args.len(),
                line,
            ));
        }
        if let Some(limit) = self.max_call_depth {
            if self.call_depth >= limit {
                return Err(stack_overflow(limit, line));
            }
        }
        tracing::trace!(
            depth = self.call_depth,
            remaining_stack = ?lox_stack::remaining_stack(),
            "enter call"
        );

        let env = function.closure.child();
        let params = function.arena.get_params(function.params);
        for (&param, value) in params.iter().zip(args) {
            env.define(param, value);
        }

        self.call_depth += 1;
        let result = self.execute_block(&function.arena, function.body, &env);
        self.call_depth -= 1;

        let signal = result.map_err(|err| err.with_frame(function.name, line))?;
        if let Some(err) = escaped_loop_signal(&signal) {
            return Err(err.with_frame(function.name, line));
        }
        match signal {
            Signal::Return { value, .. } => Ok(value),
            _ => Ok(Value::Nil),
        }
    }

    fn call_native(&self, native: NativeFunction, args: &[Value], line: u32) -> EvalResult {
        if args.len() != native.arity {
            return Err(arity_mismatch(native.name, native.arity, args.len(), line));
        }
        (native.func)(self, args)
    }
}
