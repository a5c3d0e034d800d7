//! This crate contains all definitions for the Lox scanner, parser and
//! tree-walking interpreter: `run` is the single entry point external
//! collaborators (the CLI, the REPL) call into.

mod macros;

/// Token and source coordinate definitions, plus the scanner
pub mod tokenizer;

/// The tagged-union AST produced by the parser
pub mod ast;

/// Recursive-descent parser: tokens in, `Stmt` sequence out
pub mod parser;

/// The tree-walking evaluator
pub mod interpreter;

/// Shared diagnostic formatting and the process exit-code contract
pub mod diagnostics;

use colored::Colorize;
use diagnostics::ExitStatus;
use interpreter::Interpreter;
use parser::Parser;
use tokenizer::scanner::Scanner;

/// Scans, parses, and evaluates `source`, printing any diagnostics to
/// stderr. Returns the `ExitStatus` the caller should map to a process exit
/// code.
pub fn run(source: &str) -> ExitStatus {
    crate::loc!("scanning");
    let tokens = match Scanner::new(source).scan_tokens() {
        Ok(tokens) => tokens,
        Err(err) => {
            report("Syntax Error", &err.to_string());
            return ExitStatus::CompileError;
        }
    };

    crate::loc!("parsing");
    let statements = match Parser::new(tokens).parse() {
        Ok(statements) => statements,
        Err(errors) => {
            for err in &errors {
                report("Syntax Error", &err.to_string());
            }
            return ExitStatus::CompileError;
        }
    };

    crate::loc!("evaluating");
    let mut interpreter = Interpreter::new();
    match interpreter.interpret(&statements) {
        Ok(()) => ExitStatus::Ok,
        Err(err) => {
            report("Runtime Error", &err.to_string());
            ExitStatus::RuntimeError
        }
    }
}

/// Prints a colored diagnostic label followed by the plain-text diagnostic
/// body, so substring assertions against stderr (`"Undefined variable 'a'
/// at (1:7)"`) keep matching regardless of the terminal's color support.
fn report(label: &str, message: &str) {
    let label = if label == "Runtime Error" {
        label.bright_red()
    } else {
        label.red()
    };
    eprintln!("{label}: {message}");
}
