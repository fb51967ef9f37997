//! Built-in functions seeded into the global environment.

use lox_ir::StringInterner;

use crate::environment::Environment;
use crate::errors::EvalResult;
use crate::interpreter::Interpreter;
use crate::value::{NativeFunction, Value};

/// Every native, in registration order.
pub const NATIVES: &[NativeFunction] = &[NativeFunction {
    name: "clock",
    arity: 0,
    func: clock,
}];

/// Define every native in `globals`.
pub fn register(globals: &Environment, interner: &StringInterner) {
    for native in NATIVES {
        globals.define(interner.intern(native.name), Value::Native(*native));
    }
}

/// Seconds since the interpreter was created, on a monotonic clock.
fn clock(interpreter: &Interpreter, _args: &[Value]) -> EvalResult {
    Ok(Value::Number(interpreter.elapsed().as_secs_f64()))
}
