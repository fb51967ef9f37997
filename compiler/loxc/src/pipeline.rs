//! Source-to-result pipeline shared by every command.

use lox_diagnostic::Diagnostic;
use lox_eval::{Interpreter, InterpreterBuilder, SharedPrintHandler};
use lox_ir::{Program, SharedArena, SharedInterner, StringInterner};

use crate::RunOptions;

/// A program that lexed and parsed without diagnostics.
#[derive(Debug)]
pub struct ParsedProgram {
    pub program: Program,
    pub arena: SharedArena,
}

/// Lex and parse `source`.
///
/// Any lex or parse diagnostic means there is no program to run; all of
/// them are returned, lexer diagnostics first.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse_source(
    source: &str,
    interner: &StringInterner,
) -> Result<ParsedProgram, Vec<Diagnostic>> {
    let lexed = lox_lexer::lex(source, interner);
    let parsed = lox_parse::parse(&lexed.tokens, interner);

    let diagnostics: Vec<Diagnostic> = lexed
        .errors
        .iter()
        .map(lox_lexer::LexError::to_diagnostic)
        .chain(parsed.errors.iter().map(lox_parse::ParseError::to_diagnostic))
        .collect();
    if !diagnostics.is_empty() {
        return Err(diagnostics);
    }

    Ok(ParsedProgram {
        program: parsed.program,
        arena: SharedArena::new(parsed.arena),
    })
}

/// An interpreter plus the interner its programs are parsed with.
///
/// Globals persist across [`Session::run`] calls; a failed run leaves
/// whatever it defined before failing.
pub struct Session {
    interner: SharedInterner,
    interpreter: Interpreter,
}

impl Session {
    pub fn new(options: &RunOptions, print_handler: SharedPrintHandler) -> Self {
        let interner = SharedInterner::new();
        let mut builder = InterpreterBuilder::new(interner.clone()).print_handler(print_handler);
        if let Some(depth) = options.max_call_depth {
            builder = builder.max_call_depth(depth);
        }
        Session {
            interner,
            interpreter: builder.build(),
        }
    }

    /// Parse and run `source`, returning the diagnostics that stopped it.
    pub fn run(&mut self, source: &str) -> Result<(), Vec<Diagnostic>> {
        let parsed = parse_source(source, &self.interner)?;
        self.interpreter
            .interpret(&parsed.program, &parsed.arena)
            .map_err(|err| vec![err.to_diagnostic()])
    }
}
