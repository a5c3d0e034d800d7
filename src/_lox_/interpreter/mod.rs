//! The tree-walking evaluator: walks statements and expressions directly,
//! without compiling to any intermediate bytecode.

use crate::ast::expr::*;
use crate::ast::stmt::*;
use crate::tokenizer::token::{Literal as TokenLiteral, Token};
use std::io::{self, Write};

pub mod environment;
pub mod error;
pub mod value;

use environment::Environment;
use error::RuntimeError;
use value::Value;

type EvalResult = Result<Value, RuntimeError>;
type ExecResult = Result<(), RuntimeError>;

/// `W` is the sink for `print` statements; defaults to stdout for the real
/// CLI, and is swapped for an in-memory buffer in tests.
pub struct Interpreter<W: Write = io::Stdout> {
    environment: Environment,
    out: W,
}

impl Interpreter<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for Interpreter<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Interpreter<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            environment: Environment::new(),
            out,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn interpret(&mut self, statements: &[Stmt]) -> ExecResult {
        for statement in statements {
            self.execute(statement)?;
        }
        Ok(())
    }

    fn execute(&mut self, stmt: &Stmt) -> ExecResult {
        stmt.accept(self)
    }

    fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        expr.accept(self)
    }

    /// Coerces a `Value` to the `f64` it must be to serve as an operand of an
    /// arithmetic or comparison operator, rejecting non-numbers and NaN. A
    /// *result* that is NaN or infinite (e.g. from `1 / 0`) is unaffected;
    /// only operands going in are checked.
    fn numeric_operand(&self, value: &Value, operator: &Token) -> Result<f64, RuntimeError> {
        match value {
            Value::Number(n) if !n.is_nan() => Ok(*n),
            Value::Number(_) => Err(RuntimeError::new(
                "Operand must not be NaN".to_string(),
                operator.clone(),
            )),
            _ => Err(RuntimeError::new(
                "Operand must be a number".to_string(),
                operator.clone(),
            )),
        }
    }
}

impl<W: Write> ExprVisitor<EvalResult> for Interpreter<W> {
    fn visit_literal(&mut self, expr: &LiteralExpr) -> EvalResult {
        Ok(match &expr.token.literal {
            Some(TokenLiteral::Number(n)) => Value::Number(*n),
            Some(TokenLiteral::Str(s)) => Value::String(s.clone()),
            Some(TokenLiteral::Bool(b)) => Value::Boolean(*b),
            None => Value::Nil,
        })
    }

    fn visit_grouping(&mut self, expr: &GroupingExpr) -> EvalResult {
        self.evaluate(&expr.inner)
    }

    fn visit_unary(&mut self, expr: &UnaryExpr) -> EvalResult {
        use crate::tokenizer::token_type::TokenType::*;

        let operand = self.evaluate(&expr.operand)?;
        match expr.operator.kind {
            BANG => Ok(Value::Boolean(!operand.is_truthy())),
            MINUS => {
                let n = self.numeric_operand(&operand, &expr.operator)?;
                Ok(Value::Number(-n))
            }
            _ => unreachable!("parser only produces ! or - as unary operators"),
        }
    }

    fn visit_binary(&mut self, expr: &BinaryExpr) -> EvalResult {
        use crate::tokenizer::token_type::TokenType::*;

        let left = self.evaluate(&expr.left)?;
        let right = self.evaluate(&expr.right)?;
        let op = &expr.operator;

        match op.kind {
            PLUS => match (&left, &right) {
                (Value::String(_), _) | (_, Value::String(_)) => {
                    Ok(Value::String(format!("{left}{right}")))
                }
                _ => {
                    let l = self.numeric_operand(&left, op)?;
                    let r = self.numeric_operand(&right, op)?;
                    Ok(Value::Number(l + r))
                }
            },
            MINUS => {
                let l = self.numeric_operand(&left, op)?;
                let r = self.numeric_operand(&right, op)?;
                Ok(Value::Number(l - r))
            }
            STAR => {
                let l = self.numeric_operand(&left, op)?;
                let r = self.numeric_operand(&right, op)?;
                Ok(Value::Number(l * r))
            }
            SLASH => {
                let l = self.numeric_operand(&left, op)?;
                let r = self.numeric_operand(&right, op)?;
                Ok(Value::Number(l / r))
            }
            GREATER => {
                let l = self.numeric_operand(&left, op)?;
                let r = self.numeric_operand(&right, op)?;
                Ok(Value::Boolean(l > r))
            }
            GREATER_EQUAL => {
                let l = self.numeric_operand(&left, op)?;
                let r = self.numeric_operand(&right, op)?;
                Ok(Value::Boolean(l >= r))
            }
            LESS => {
                let l = self.numeric_operand(&left, op)?;
                let r = self.numeric_operand(&right, op)?;
                Ok(Value::Boolean(l < r))
            }
            LESS_EQUAL => {
                let l = self.numeric_operand(&left, op)?;
                let r = self.numeric_operand(&right, op)?;
                Ok(Value::Boolean(l <= r))
            }
            EQUAL_EQUAL => Ok(Value::Boolean(left == right)),
            BANG_EQUAL => Ok(Value::Boolean(left != right)),
            _ => unreachable!("parser only produces binary operators in this set"),
        }
    }

    fn visit_variable(&mut self, expr: &VariableExpr) -> EvalResult {
        self.environment.get(&expr.name)
    }
}

impl<W: Write> StmtVisitor<ExecResult> for Interpreter<W> {
    fn visit_expr_stmt(&mut self, stmt: &ExprStmt) -> ExecResult {
        self.evaluate(&stmt.expression)?;
        Ok(())
    }

    fn visit_print_stmt(&mut self, stmt: &PrintStmt) -> ExecResult {
        let value = self.evaluate(&stmt.expression)?;
        writeln!(self.out, "{value}").expect("writing to the configured output should not fail");
        Ok(())
    }

    fn visit_var_decl(&mut self, stmt: &VarDeclStmt) -> ExecResult {
        let value = match &stmt.initializer {
            Some(expr) => self.evaluate(expr)?,
            None => Value::Nil,
        };
        self.environment.declare(&stmt.name.lexeme, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use crate::tokenizer::scanner::Scanner;

    fn run(source: &str) -> (ExecResult, String) {
        let tokens = Scanner::new(source).scan_tokens().expect("scan should succeed");
        let statements = Parser::new(tokens).parse().expect("parse should succeed");
        let mut interpreter = Interpreter::with_writer(Vec::new());
        let result = interpreter.interpret(&statements);
        let output = String::from_utf8(interpreter.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn prints_arithmetic_result() {
        let (result, output) = run("print 1 + 2 * 3;");
        assert!(result.is_ok());
        assert_eq!(output, "7\n");
    }

    #[test]
    fn string_concatenation_coerces_non_string_operand() {
        let (result, output) = run(r#"print "n=" + 1;"#);
        assert!(result.is_ok());
        assert_eq!(output, "n=1\n");
    }

    #[test]
    fn division_by_zero_yields_infinity_not_an_error() {
        let (result, output) = run("print 1 / 0;");
        assert!(result.is_ok());
        assert_eq!(output, "inf\n");
    }

    #[test]
    fn var_decl_without_initializer_binds_nil() {
        let (result, output) = run("var x; print x;");
        assert!(result.is_ok());
        assert_eq!(output, "nil\n");
    }

    #[test]
    fn redeclaring_a_variable_rebinds_it() {
        let (result, output) = run("var x = 1; var x = 2; print x;");
        assert!(result.is_ok());
        assert_eq!(output, "2\n");
    }

    #[test]
    fn undefined_variable_is_a_runtime_error() {
        let (result, _) = run("print a;");
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Undefined variable 'a' at (1:7)");
    }

    #[test]
    fn adding_a_bool_and_a_number_is_a_runtime_error() {
        let (result, _) = run("print true + 1;");
        assert!(result.is_err());
    }

    #[test]
    fn equality_across_mismatched_types_is_false_not_an_error() {
        let (result, output) = run(r#"print 1 == "1";"#);
        assert!(result.is_ok());
        assert_eq!(output, "false\n");
    }
}
