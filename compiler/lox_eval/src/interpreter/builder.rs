//! `InterpreterBuilder` for creating `Interpreter` instances.

use std::time::Instant;

use lox_ir::SharedInterner;

use super::Interpreter;
use crate::natives;
use crate::{stdout_handler, Environment, SharedPrintHandler};

/// Builder for creating `Interpreter` instances with various configurations.
///
/// Defaults: stdout printing, a fresh global environment, no call-depth
/// limit beyond what the native stack allows.
pub struct InterpreterBuilder {
    interner: SharedInterner,
    env: Option<Environment>,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: Option<usize>,
}

impl InterpreterBuilder {
    pub fn new(interner: SharedInterner) -> Self {
        Self {
            interner,
            env: None,
            print_handler: None,
            max_call_depth: None,
        }
    }

    /// Use an existing global environment.
    ///
    /// Natives are still (re)defined in it.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Set the print handler for `print` output.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Fail with a stack-overflow error once this many user calls are active.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = Some(depth);
        self
    }

    pub fn build(self) -> Interpreter {
        let globals = self.env.unwrap_or_else(Environment::new_global);
        natives::register(&globals, &self.interner);
        Interpreter {
            interner: self.interner,
            globals,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            max_call_depth: self.max_call_depth,
            call_depth: 0,
            started: Instant::now(),
        }
    }
}
