use lox_diagnostic::ErrorCode;
use lox_ir::StringInterner;
use loxc::parse_source;
use pretty_assertions::assert_eq;

use crate::common::codes;

fn diagnostics(source: &str) -> Vec<lox_diagnostic::Diagnostic> {
    parse_source(source, &StringInterner::new()).unwrap_err()
}

#[test]
fn valid_source_parses() {
    let interner = StringInterner::new();
    let parsed = parse_source("var a = 1; print a;", &interner).unwrap();
    assert_eq!(parsed.arena.get_stmt_list(parsed.program.statements).len(), 2);
}

#[test]
fn missing_semicolon_points_at_next_token() {
    let diags = diagnostics("print 1\nprint 2;");
    assert_eq!(codes(&diags), [ErrorCode::E1001]);
    assert_eq!(diags[0].message, "expected ';' after value");
    assert_eq!(diags[0].line, Some(2));
    assert_eq!(diags[0].location.as_deref(), Some("at 'print'"));
}

#[test]
fn error_at_end_of_input() {
    let diags = diagnostics("print (1 + 2");
    assert_eq!(diags[0].message, "expected enclosing ')' after expression");
    assert_eq!(diags[0].location.as_deref(), Some("at end"));
}

#[test]
fn recovery_reports_every_bad_declaration() {
    let diags = diagnostics("var = 1;\nprint ;\nvar ok = 2;\nfun (x) {}");
    assert_eq!(
        codes(&diags),
        [ErrorCode::E1004, ErrorCode::E1002, ErrorCode::E1004]
    );
    let lines: Vec<_> = diags.iter().map(|d| d.line).collect();
    assert_eq!(lines, [Some(1), Some(2), Some(4)]);
}

#[test]
fn invalid_assignment_target_is_reported() {
    let diags = diagnostics("1 + 2 = 3;");
    assert_eq!(codes(&diags), [ErrorCode::E1003]);
    assert_eq!(diags[0].message, "invalid assignment target");
}

#[test]
fn lexer_diagnostics_come_first() {
    let diags = diagnostics("var a = @;\n/* never closed");
    assert_eq!(codes(&diags)[0], ErrorCode::E0002);
    assert!(codes(&diags).contains(&ErrorCode::E0003));
}

#[test]
fn lexer_diagnostics_carry_location() {
    let diags = diagnostics("é print 1;");
    assert_eq!(codes(&diags), [ErrorCode::E0002]);
    assert_eq!(diags[0].line, Some(1));
    assert_eq!(diags[0].location.as_deref(), Some("at 'é'"));

    let diags = diagnostics("var x = 1 @ 2;");
    assert_eq!(diags[0].location.as_deref(), Some("at '@'"));

    let diags = diagnostics("print \"open;");
    assert_eq!(codes(&diags)[0], ErrorCode::E0001);
    assert_eq!(diags[0].location.as_deref(), Some("at end"));
}

#[test]
fn too_many_arguments() {
    let args = vec!["1"; 256].join(", ");
    let diags = diagnostics(&format!("f({args});"));
    assert_eq!(codes(&diags), [ErrorCode::E1005]);
    assert_eq!(diags[0].message, "can't have more than 255 arguments");
}
