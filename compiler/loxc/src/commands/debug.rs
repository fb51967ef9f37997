//! Debug commands: `lex` and `parse` for inspecting the front end.

use lox_diagnostic::Diagnostic;
use lox_ir::printer::AstPrinter;
use lox_ir::StringInterner;

use super::read_file;
use crate::{parse_source, DriverError, RunOptions};

/// Tokens of `source`, one `line KIND lexeme` line each, and any lex errors.
pub fn format_tokens(source: &str, interner: &StringInterner) -> (String, Vec<Diagnostic>) {
    let lexed = lox_lexer::lex(source, interner);
    let mut out = String::new();
    for token in lexed.tokens.iter() {
        let lexeme = interner.lookup(token.lexeme);
        let line = format!("{} {} {}", token.line, token.kind.display_name(), lexeme);
        out.push_str(line.trim_end());
        out.push('\n');
    }
    let errors = lexed
        .errors
        .iter()
        .map(lox_lexer::LexError::to_diagnostic)
        .collect();
    (out, errors)
}

/// The parsed program as S-expressions, one statement per line.
pub fn format_ast(source: &str, interner: &StringInterner) -> Result<String, Vec<Diagnostic>> {
    let parsed = parse_source(source, interner)?;
    Ok(AstPrinter::new(&parsed.arena, interner).program(&parsed.program))
}

/// Lex a file and print its token stream.
pub fn lex_file(path: &str, options: &RunOptions) -> Result<(), DriverError> {
    let source = read_file(path)?;
    let interner = StringInterner::new();
    let (tokens, errors) = format_tokens(&source, &interner);
    print!("{tokens}");
    if errors.is_empty() {
        return Ok(());
    }
    options.report(&errors);
    Err(DriverError::Reported {
        count: errors.len(),
    })
}

/// Parse a file and print its AST.
pub fn parse_file(path: &str, options: &RunOptions) -> Result<(), DriverError> {
    let source = read_file(path)?;
    let interner = StringInterner::new();
    match format_ast(&source, &interner) {
        Ok(ast) => {
            print!("{ast}");
            Ok(())
        }
        Err(diagnostics) => {
            options.report(&diagnostics);
            Err(DriverError::Reported {
                count: diagnostics.len(),
            })
        }
    }
}
