//! Argument dispatch: a bare invocation starts the REPL, a single argument
//! is treated as a source file to run.

use crate::repl;
use std::fs;
use std::process;

/// Start a REPL for Lox if no CLI args are passed, or run a single source
/// file if one path is given.
pub fn run_cli() {
    let args = std::env::args().collect::<Vec<String>>();
    match args.as_slice() {
        [_] => {
            if let Err(err) = repl::start_repl() {
                eprintln!("REPL error: {err}");
                process::exit(1);
            }
        }
        [_, path] => run_file(path),
        _ => {
            eprintln!("Usage: loxr [script]");
            process::exit(64);
        }
    }
}

pub fn run_file(path: &str) {
    let source = fs::read_to_string(path).unwrap_or_else(|err| {
        eprintln!("Cannot read {path}: {err}");
        process::exit(74);
    });
    let status = _lox_::run(&source);
    process::exit(status.code());
}
