use lox_ir::StringInterner;
use loxc::commands::{format_ast, format_tokens};
use pretty_assertions::assert_eq;

fn ast(source: &str) -> String {
    format_ast(source, &StringInterner::new()).unwrap()
}

#[test]
fn expressions_render_as_s_expressions() {
    assert_eq!(ast("print 1 + 2 * 3;"), "(print (+ 1 (* 2 3)))\n");
    assert_eq!(ast("(1 + 2) * 3;"), "(expr (* (group (+ 1 2)) 3))\n");
    assert_eq!(ast("a = b or !c;"), "(expr (= a (or b (! c))))\n");
}

#[test]
fn statements_render_one_per_line() {
    assert_eq!(
        ast("var a = 1;\nwhile (a < 3) a = a + 1;"),
        "(var a 1)\n(while (< a 3) (expr (= a (+ a 1))))\n"
    );
}

#[test]
fn for_loops_are_desugared() {
    assert_eq!(
        ast("for (var i = 0; i < 2; i = i + 1) print i;"),
        "(block (var i 0) (while (< i 2) (block (print i) (expr (= i (+ i 1))))))\n"
    );
}

#[test]
fn functions_and_calls() {
    assert_eq!(
        ast("fun add(a, b) { return a + b; } print add(1, \"x\");"),
        "(fun add (a b) (return (+ a b)))\n(print (call add 1 \"x\"))\n"
    );
}

#[test]
fn token_listing() {
    let (tokens, errors) = format_tokens("var x = 1;\n// done\nprint x;", &StringInterner::new());
    assert!(errors.is_empty());
    assert_eq!(
        tokens,
        "1 VAR var\n1 IDENTIFIER x\n1 EQUAL =\n1 NUMBER 1\n1 SEMICOLON ;\n\
         3 PRINT print\n3 IDENTIFIER x\n3 SEMICOLON ;\n3 EOF\n"
    );
}

#[test]
fn token_listing_reports_lex_errors() {
    let (tokens, errors) = format_tokens("var s = \"open", &StringInterner::new());
    assert!(tokens.ends_with("EOF\n"));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "unterminated string");
}
