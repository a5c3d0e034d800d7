//! Shared diagnostic formatting and the process exit-code contract.
//!
//! Both the scanner and the parser raise `CompileError` (spec's "compile-time
//! diagnostics" — lexical and syntactic errors are not distinguished at this
//! boundary). A compile error always carries the *coordinate* where it was
//! raised — the scanner has no token to attach to an unterminated string or
//! an unrecognized character, only the position it was scanning when it
//! gave up — so `CompileError` stores a bare `Coordinate` rather than a
//! `Token`. The interpreter raises `RuntimeError` separately, which always
//! has a responsible token (a variable reference, an operator) to attach.

use crate::tokenizer::token::{Coordinate, Token};
use thiserror::Error;

/// Renders `<message> at (<line>:<offset>)`, or a bare message when no
/// coordinate is available to report.
pub(crate) fn render(message: &str, coordinate: Option<Coordinate>) -> String {
    match coordinate {
        Some(coordinate) => format!("{message} at ({coordinate})"),
        None => message.to_string(),
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{rendered}")]
pub struct CompileError {
    pub message: String,
    pub coordinate: Option<Coordinate>,
    rendered: String,
}

impl CompileError {
    pub fn new(message: String, coordinate: Option<Coordinate>) -> Self {
        let rendered = render(&message, coordinate);
        Self {
            message,
            coordinate,
            rendered,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{rendered}")]
pub struct RuntimeError {
    pub message: String,
    pub token: Token,
    rendered: String,
}

impl RuntimeError {
    pub fn new(message: String, token: Token) -> Self {
        let rendered = render(&message, Some(token.coordinate));
        Self {
            message,
            token,
            rendered,
        }
    }
}

/// The process-level outcome of a `run`, matching spec's exit code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Ok,
    CompileError,
    RuntimeError,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Ok => 0,
            ExitStatus::CompileError => 65,
            ExitStatus::RuntimeError => 70,
        }
    }
}
