//! A single flat variable scope, global for the lifetime of one evaluator run.

use super::error::RuntimeError;
use super::value::Value;
use crate::tokenizer::token::Token;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct Environment {
    values: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds (or rebinds) `name`. Redeclaring an existing name with `var` is
    /// allowed; it simply overwrites the previous binding.
    pub fn declare(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_owned(), value);
    }

    pub fn get(&self, token: &Token) -> Result<Value, RuntimeError> {
        self.values.get(&token.lexeme).cloned().ok_or_else(|| {
            RuntimeError::new(
                format!("Undefined variable '{}'", token.lexeme),
                token.clone(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::token::Coordinate;
    use crate::tokenizer::token_type::TokenType;

    fn ident(name: &str) -> Token {
        Token::new(TokenType::IDENTIFIER, name, Coordinate { line: 1, offset: 1 })
    }

    #[test]
    fn declare_then_get_roundtrips() {
        let mut env = Environment::new();
        env.declare("x", Value::Number(1.0));
        assert_eq!(env.get(&ident("x")).unwrap(), Value::Number(1.0));
    }

    #[test]
    fn redeclaring_overwrites() {
        let mut env = Environment::new();
        env.declare("x", Value::Number(1.0));
        env.declare("x", Value::Number(2.0));
        assert_eq!(env.get(&ident("x")).unwrap(), Value::Number(2.0));
    }

    #[test]
    fn undefined_variable_is_a_runtime_error() {
        let env = Environment::new();
        let err = env.get(&ident("missing")).unwrap_err();
        assert_eq!(err.to_string(), "Undefined variable 'missing' at (1:1)");
    }
}
