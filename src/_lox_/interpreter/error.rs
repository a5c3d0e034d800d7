//! The interpreter raises `RuntimeError`, always carrying the token
//! responsible for the failure (there is no "runtime error with no
//! coordinate" case, unlike compile errors).

pub use crate::diagnostics::RuntimeError;
