//! Interpreter tests driven through the real lexer and parser.

mod operators_tests;

use lox_ir::{SharedArena, SharedInterner};

use crate::{buffer_handler, EvalError, Interpreter, InterpreterBuilder, SharedPrintHandler};

/// An interpreter wired to a buffer, kept alive across `run` calls.
pub(crate) struct Harness {
    interner: SharedInterner,
    output: SharedPrintHandler,
    interpreter: Interpreter,
}

impl Harness {
    pub(crate) fn new() -> Self {
        Self::with_builder(|b| b)
    }

    pub(crate) fn with_builder(
        configure: impl FnOnce(InterpreterBuilder) -> InterpreterBuilder,
    ) -> Self {
        let interner = SharedInterner::new();
        let output = buffer_handler();
        let builder = InterpreterBuilder::new(interner.clone()).print_handler(output.clone());
        let interpreter = configure(builder).build();
        Harness {
            interner,
            output,
            interpreter,
        }
    }

    /// Lex, parse and run `source`. Panics on lex or parse errors.
    pub(crate) fn run(&mut self, source: &str) -> Result<(), EvalError> {
        let lexed = lox_lexer::lex(source, &self.interner);
        assert!(lexed.errors.is_empty(), "lex errors: {:?}", lexed.errors);
        let parsed = lox_parse::parse(&lexed.tokens, &self.interner);
        assert!(parsed.errors.is_empty(), "parse errors: {:?}", parsed.errors);
        let arena = SharedArena::new(parsed.arena);
        self.interpreter.interpret(&parsed.program, &arena)
    }

    pub(crate) fn output(&self) -> String {
        self.output.get_output()
    }
}

/// Run `source` in a fresh interpreter, returning printed output and result.
pub(crate) fn run(source: &str) -> (String, Result<(), EvalError>) {
    let mut harness = Harness::new();
    let result = harness.run(source);
    (harness.output(), result)
}

/// Run `source`, which must succeed, and return its output.
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
pub(crate) fn run_ok(source: &str) -> String {
    let (output, result) = run(source);
    result.unwrap();
    output
}

/// Run `source`, which must fail, and return the output so far and the error.
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
pub(crate) fn run_err(source: &str) -> (String, EvalError) {
    let (output, result) = run(source);
    (output, result.unwrap_err())
}
