//! Runtime values.

use std::fmt;
use std::rc::Rc;

use lox_ir::printer::format_number;
use lox_ir::{ParamRange, SharedArena, StmtRange};

use crate::environment::Environment;
use crate::errors::EvalResult;
use crate::interpreter::Interpreter;

/// A value produced by evaluating an expression.
///
/// Cloning is cheap: strings and user functions are reference-counted.
#[derive(Clone, Debug)]
pub enum Value {
    Nil,
    Bool(bool),
    Number(f64),
    Str(Rc<str>),
    Function(Rc<UserFunction>),
    Native(NativeFunction),
}

impl Value {
    /// Create a string value.
    pub fn string(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }

    /// Name of the value's kind, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Function(_) | Value::Native(_) => "function",
        }
    }

    /// `nil` and `false` are falsy; everything else is truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Native(a), Value::Native(b)) => a.name == b.name,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Str(s) => f.write_str(s),
            Value::Function(func) => write!(f, "<fn {}>", func.name),
            Value::Native(_) => f.write_str("<native fn>"),
        }
    }
}

/// A function declared in Lox source.
///
/// Holds the arena its body lives in, so the function stays callable after
/// the parse that declared it is dropped.
pub struct UserFunction {
    pub name: &'static str,
    pub params: ParamRange,
    pub body: StmtRange,
    pub arena: SharedArena,
    /// Environment active at the declaration.
    pub closure: Environment,
}

impl UserFunction {
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Debug for UserFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserFunction")
            .field("name", &self.name)
            .field("arity", &self.arity())
            .finish_non_exhaustive()
    }
}

/// Signature shared by all native functions.
pub type NativeFn = fn(&Interpreter, &[Value]) -> EvalResult;

/// A function implemented in Rust.
#[derive(Copy, Clone)]
pub struct NativeFunction {
    pub name: &'static str,
    pub arity: usize,
    pub func: NativeFn,
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}
