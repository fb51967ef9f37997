//! Unary and binary operator semantics.
//!
//! Operands are already evaluated; these functions only check kinds and
//! compute. No implicit coercion between kinds.

use std::rc::Rc;

use lox_ir::{BinaryOp, UnaryOp};

use crate::errors::{division_by_zero, type_error, EvalResult};
use crate::value::Value;

const NUMBER_OPERAND: &str = "operand must be a number";
const NUMBER_OPERANDS: &str = "operands must be numbers";
const ADD_OPERANDS: &str = "operands must be two numbers or two strings";

/// Apply a unary operator. `line` locates any type error.
pub fn evaluate_unary(op: UnaryOp, operand: &Value, line: u32) -> EvalResult {
    match op {
        UnaryOp::Neg => match operand {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => Err(type_error(NUMBER_OPERAND, line)),
        },
        UnaryOp::Not => Ok(Value::Bool(!operand.is_truthy())),
    }
}

/// Apply a binary operator. `line` locates any type or arithmetic error.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value, line: u32) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),
        BinaryOp::Add => add(left, right, line),
        BinaryOp::Sub
        | BinaryOp::Mul
        | BinaryOp::Div
        | BinaryOp::Lt
        | BinaryOp::LtEq
        | BinaryOp::Gt
        | BinaryOp::GtEq => {
            let (Value::Number(a), Value::Number(b)) = (left, right) else {
                return Err(type_error(NUMBER_OPERANDS, line));
            };
            numeric(op, *a, *b, line)
        }
    }
}

fn add(left: &Value, right: &Value, line: u32) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(a), Value::Str(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::Str(Rc::from(joined)))
        }
        _ => Err(type_error(ADD_OPERANDS, line)),
    }
}

fn numeric(op: BinaryOp, a: f64, b: f64, line: u32) -> EvalResult {
    let value = match op {
        BinaryOp::Sub => Value::Number(a - b),
        BinaryOp::Mul => Value::Number(a * b),
        BinaryOp::Div => {
            // Matches -0.0 as well.
            if b == 0.0 {
                return Err(division_by_zero(line));
            }
            Value::Number(a / b)
        }
        BinaryOp::Lt => Value::Bool(a < b),
        BinaryOp::LtEq => Value::Bool(a <= b),
        BinaryOp::Gt => Value::Bool(a > b),
        BinaryOp::GtEq => Value::Bool(a >= b),
        BinaryOp::Add => Value::Number(a + b),
        BinaryOp::Eq => Value::Bool(a == b),
        BinaryOp::NotEq => Value::Bool(a != b),
    };
    Ok(value)
}
