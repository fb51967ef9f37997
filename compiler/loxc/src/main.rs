//! `lox` command-line interpreter.

use loxc::commands::{explain_error, lex_file, parse_file, run_file, run_prompt};
use loxc::{init_tracing, parse_args, DriverError, RunOptions};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = parse_args(&args).and_then(|(options, positional)| dispatch(&options, &positional));

    if let Err(err) = result {
        match &err {
            DriverError::Reported { .. } => {}
            DriverError::Usage(message) => eprintln!("{message}"),
            other => eprintln!("error: {other}"),
        }
        std::process::exit(err.exit_code());
    }
}

fn dispatch(options: &RunOptions, positional: &[String]) -> Result<(), DriverError> {
    let Some((command, rest)) = positional.split_first() else {
        return run_prompt(options);
    };

    match command.as_str() {
        "run" => with_file(rest, "usage: lox run <file>", |path| {
            run_file(path, options)
        }),
        "lex" => with_file(rest, "usage: lox lex <file>", |path| {
            lex_file(path, options)
        }),
        "parse" => with_file(rest, "usage: lox parse <file>", |path| {
            parse_file(path, options)
        }),
        "explain" | "--explain" => with_file(rest, "usage: lox explain <code>", explain_error),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("lox {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        script if rest.is_empty() => run_file(script, options),
        _ => Err(DriverError::usage("usage: lox [script]")),
    }
}

/// Run `f` on the single argument in `rest`, or fail with `usage`.
fn with_file(
    rest: &[String],
    usage: &str,
    f: impl FnOnce(&str) -> Result<(), DriverError>,
) -> Result<(), DriverError> {
    match rest {
        [arg] => f(arg.as_str()),
        _ => Err(DriverError::usage(usage)),
    }
}

fn print_usage() {
    println!("Lox tree-walking interpreter");
    println!();
    println!("Usage: lox [options] [script]");
    println!("       lox [options] <command> <arg>");
    println!();
    println!("With no script, starts an interactive prompt.");
    println!();
    println!("Commands:");
    println!("  run <file>          Run a Lox script");
    println!("  lex <file>          Print the token stream");
    println!("  parse <file>        Print the parsed program as S-expressions");
    println!("  explain <code>      Explain an error code (e.g., E6002)");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("Options:");
    println!("  --color=<mode>          auto (default), always, never");
    println!("  --error-format=<fmt>    human (default), short");
    println!("  --max-call-depth=<n>    Fail with a stack overflow error past n nested calls");
    println!();
    println!("Environment:");
    println!("  RUST_LOG        Enable tracing output (e.g., RUST_LOG=lox_eval=debug)");
    println!("  LOX_LOG_TREE    Print traces as an indented span tree");
}
