//! A line-editing REPL for Lox, backed by `rustyline`.
//!
//! Each line is run independently through `_lox_::run`; there is no
//! persistent environment across lines (spec.md's Environment is scoped to
//! one evaluator invocation).

use rustyline::error::ReadlineError;
use rustyline::Editor;

const HISTORY_FILE: &str = ".loxr_history";

pub fn start_repl() -> std::io::Result<()> {
    let mut rl = Editor::<()>::new();
    if rl.load_history(HISTORY_FILE).is_err() {
        // No previous history; that's fine on a first run.
    }

    loop {
        match rl.readline("loxr> ") {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                rl.add_history_entry(input);
                if input == "exit" || input == "quit" {
                    break;
                }
                _lox_::run(input);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Readline error: {err}");
                break;
            }
        }
    }

    let _ = rl.save_history(HISTORY_FILE);
    Ok(())
}
