use std::io::Cursor;

use pretty_assertions::assert_eq;

use crate::common::Captured;
use loxc::commands::repl;
use loxc::RunOptions;

fn drive(lines: &str) -> (String, String) {
    let options = RunOptions::default();
    let mut captured = Captured::new();
    let mut prompts = Vec::new();
    repl(
        &mut captured.session,
        Cursor::new(lines.as_bytes()),
        &mut prompts,
        &options,
    )
    .unwrap();
    (captured.output(), String::from_utf8(prompts).unwrap())
}

#[test]
fn globals_survive_across_lines() {
    let (output, _) = drive("var a = 1;\nfun bump() { a = a + 1; }\nbump();\nprint a;\n");
    assert_eq!(output, "2\n");
}

#[test]
fn errors_do_not_end_the_session() {
    let (output, _) = drive("print 1/0;\nprint ;\nprint \"still here\";\n");
    assert_eq!(output, "still here\n");
}

#[test]
fn one_prompt_per_line_plus_final_newline() {
    let (_, prompts) = drive("print 1;\nprint 2;\n");
    assert_eq!(prompts, "> > > \n");
}

#[test]
fn empty_input_exits_immediately() {
    let (output, prompts) = drive("");
    assert_eq!(output, "");
    assert_eq!(prompts, "> \n");
}
