use pretty_assertions::assert_eq;

use super::{run_err, run_ok};
use crate::{evaluate_binary, evaluate_unary, EvalErrorKind, Value};
use lox_ir::{BinaryOp, UnaryOp};

#[test]
fn precedence() {
    assert_eq!(run_ok("print 1 + 2 * 3;"), "7\n");
    assert_eq!(run_ok("print (1 + 2) * 3;"), "9\n");
    assert_eq!(run_ok("print 10 - 4 - 3;"), "3\n");
    assert_eq!(run_ok("print -2 * -3;"), "6\n");
}

#[test]
fn number_formatting() {
    assert_eq!(run_ok("print 7 / 2;"), "3.5\n");
    assert_eq!(run_ok("print 1.50;"), "1.5\n");
    assert_eq!(run_ok("print 0.1 + 0.2;"), "0.30000000000000004\n");
}

#[test]
fn string_concatenation() {
    assert_eq!(run_ok(r#"print "a" + "b";"#), "ab\n");
    assert_eq!(run_ok(r#"var s = "x"; s = s + s; print s;"#), "xx\n");
}

#[test]
fn add_rejects_mixed_kinds() {
    let (_, err) = run_err(r#"print "a" + 1;"#);
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeError {
            message: "operands must be two numbers or two strings"
        }
    );
    assert_eq!(err.line, 1);
}

#[test]
fn arithmetic_requires_numbers() {
    for source in [
        r#"print "a" - 1;"#,
        "print nil * 2;",
        "print true / 1;",
        r#"print 1 < "2";"#,
        "print nil >= nil;",
    ] {
        let (_, err) = run_err(source);
        assert_eq!(err.message, "operands must be numbers", "{source}");
    }
}

#[test]
fn negation_requires_number() {
    let (_, err) = run_err(r#"print -"x";"#);
    assert_eq!(err.message, "operand must be a number");
}

#[test]
fn division_by_zero_is_an_error() {
    let (_, err) = run_err("print 1 / 0;");
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    let (_, err) = run_err("print 1 / -0;");
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    assert_eq!(run_ok("print 0 / 0.5;"), "0\n");
}

#[test]
fn comparison_and_equality() {
    assert_eq!(
        run_ok("print 1 < 2; print 2 <= 2; print 3 > 4; print 4 >= 5;"),
        "true\ntrue\nfalse\nfalse\n"
    );
    assert_eq!(
        run_ok(r#"print nil == nil; print nil == false; print 1 == "1"; print "a" != "a";"#),
        "true\nfalse\nfalse\nfalse\n"
    );
}

#[test]
fn not_uses_truthiness() {
    assert_eq!(
        run_ok(r#"print !nil; print !0; print !""; print !!false;"#),
        "true\nfalse\nfalse\nfalse\n"
    );
}

#[test]
fn logical_operators_return_operands() {
    assert_eq!(run_ok(r#"print nil or "yes";"#), "yes\n");
    assert_eq!(run_ok("print 1 or 2;"), "1\n");
    assert_eq!(run_ok("print nil and 2;"), "nil\n");
    assert_eq!(run_ok("print 1 and 2;"), "2\n");
}

#[test]
fn logical_operators_short_circuit() {
    let out = run_ok(
        "var hits = 0;
         fun hit() { hits = hits + 1; return true; }
         false and hit();
         true or hit();
         print hits;",
    );
    assert_eq!(out, "0\n");
}

#[test]
fn operator_functions_directly() {
    assert_eq!(
        evaluate_binary(BinaryOp::Add, &Value::Number(1.0), &Value::Number(2.0), 1),
        Ok(Value::Number(3.0))
    );
    assert_eq!(
        evaluate_unary(UnaryOp::Not, &Value::Nil, 1),
        Ok(Value::Bool(true))
    );
    let err = evaluate_binary(BinaryOp::Div, &Value::Number(1.0), &Value::Number(0.0), 9);
    assert_eq!(err.map_err(|e| e.line), Err(9));
}
