//! The parser raises the same `CompileError` type the scanner does; both are
//! compile-time diagnostics from spec's perspective.

pub use crate::diagnostics::CompileError;
