mod cli;
mod repl;

fn main() {
    cli::run_cli();
}
