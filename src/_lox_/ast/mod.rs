//! The tagged-union AST produced by the parser and walked by the interpreter.

/// Expression node variants and the `ExprVisitor` operation trait
pub mod expr;

/// Statement node variants and the `StmtVisitor` operation trait
pub mod stmt;

/// Lisp-style debug printer, used by tests and debug tracing
pub mod printer;
