use lox_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

use crate::common::{run_failure, Captured};
use loxc::RunOptions;

#[test]
fn fail_fast_on_division_by_zero() {
    let (output, diag) = run_failure("print 1;\nprint 1/0;\nprint 2;");
    assert_eq!(output, "1\n");
    assert_eq!(diag.code, ErrorCode::E6002);
    assert_eq!(diag.message, "division by zero");
    assert_eq!(diag.line, Some(2));
}

#[test]
fn mixed_addition_is_a_type_error() {
    let (_, diag) = run_failure(r#"print "a" + 1;"#);
    assert_eq!(diag.code, ErrorCode::E6001);
    assert_eq!(diag.message, "operands must be two numbers or two strings");
}

#[test]
fn arity_mismatch_both_ways() {
    let (_, too_few) = run_failure("fun f(a) {}\nf();");
    assert_eq!(too_few.code, ErrorCode::E6006);
    assert_eq!(too_few.message, "f expects 1 argument, got 0");
    assert_eq!(too_few.line, Some(2));

    let (_, too_many) = run_failure("fun f(a) {}\nf(1, 2);");
    assert_eq!(too_many.message, "f expects 1 argument, got 2");
}

#[test]
fn uninitialized_read() {
    let (_, diag) = run_failure("var a;\nprint a;");
    assert_eq!(diag.code, ErrorCode::E6004);
}

#[test]
fn call_line_is_the_closing_paren() {
    let (_, diag) = run_failure("var notfn = 1;\nnotfn(\n  1,\n  2\n);");
    assert_eq!(diag.code, ErrorCode::E6005);
    assert_eq!(diag.message, "number is not callable");
    assert_eq!(diag.line, Some(5));
}

#[test]
fn runtime_errors_inside_calls_carry_backtrace_notes() {
    let (_, diag) = run_failure("fun boom() {\n  return nil - 1;\n}\nboom();");
    assert_eq!(diag.line, Some(2));
    assert_eq!(diag.notes, ["in call to 'boom' at line 4"]);
}

#[test]
fn stray_control_flow() {
    assert_eq!(run_failure("break;").1.code, ErrorCode::E6007);
    assert_eq!(run_failure("continue;").1.code, ErrorCode::E6007);
    assert_eq!(run_failure("return;").1.code, ErrorCode::E6008);
}

#[test]
fn call_depth_limit_from_options() {
    let options = RunOptions {
        max_call_depth: Some(100),
        ..RunOptions::default()
    };
    let mut captured = Captured::with_options(&options);
    let diagnostics = captured
        .run("fun f() { f(); } f();")
        .unwrap_err();
    assert_eq!(diagnostics[0].code, ErrorCode::E6009);
    assert_eq!(
        diagnostics[0].message,
        "maximum recursion depth exceeded (limit: 100)"
    );
}

#[test]
fn parse_errors_prevent_execution() {
    let mut captured = Captured::new();
    let diagnostics = captured.run("print 1;\nprint ;").unwrap_err();
    assert_eq!(diagnostics[0].code, ErrorCode::E1002);
    assert_eq!(captured.output(), "");
}
