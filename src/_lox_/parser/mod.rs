//! Recursive-descent parser: tokens in, `Stmt` sequence out.
//!
//! *program*     → `declaration* EOF ;`
//! *declaration* → `varDecl | statement ;`
//! *varDecl*     → `"var" IDENTIFIER ( "=" expression )? ";" ;`
//! *statement*   → `printStmt | exprStmt ;`
//! *printStmt*   → `"print" expression ";" ;`
//! *exprStmt*    → `expression ";" ;`
//! *expression*  → `equality ;`
//! *equality*    → `comparison ( ( "!=" | "==" ) comparison )* ;`
//! *comparison*  → `term ( ( "<" | "<=" | ">" | ">=" ) term )* ;`
//! *term*        → `factor ( ( "+" | "-" ) factor )* ;`
//! *factor*      → `unary ( ( "/" | "*" ) unary )* ;`
//! *unary*       → `( "!" | "-" ) unary | primary ;`
//! *primary*     → `NUMBER | STRING | "true" | "false" | "nil" | IDENTIFIER | "(" expression ")" ;`

use crate::ast::expr::*;
use crate::ast::stmt::*;
use crate::tokenizer::token::Token;
use crate::tokenizer::token_type::TokenType::{self, *};
use better_peekable::{BPeekable, BetterPeekable};
use std::vec::IntoIter;

/// Parser raises `CompileError`, shared with the scanner
pub mod error;

use error::CompileError;

pub struct Parser {
    tokens: BPeekable<IntoIter<Token>>,
    previous: Option<Token>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter().better_peekable(),
            previous: None,
        }
    }

    /// Parses the full token stream, collecting every `CompileError` rather
    /// than stopping at the first one. Synchronizes to the next statement
    /// boundary after each error so later, unrelated errors still surface.
    pub fn parse(&mut self) -> Result<Vec<Stmt>, Vec<CompileError>> {
        let mut statements = Vec::new();
        let mut errors = Vec::new();
        while !self.is_at_end() {
            match self.declaration() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    errors.push(err);
                    self.synchronize();
                }
            }
        }
        if errors.is_empty() {
            Ok(statements)
        } else {
            Err(errors)
        }
    }

    fn declaration(&mut self) -> Result<Stmt, CompileError> {
        if self.matches(&[VAR]) {
            self.var_declaration()
        } else {
            self.statement()
        }
    }

    fn var_declaration(&mut self) -> Result<Stmt, CompileError> {
        let name = self.consume(IDENTIFIER)?;
        let initializer = if self.matches(&[EQUAL]) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(SEMICOLON)?;
        Ok(Stmt::VarDecl(VarDeclStmt { name, initializer }))
    }

    fn statement(&mut self) -> Result<Stmt, CompileError> {
        if self.matches(&[PRINT]) {
            self.print_statement()
        } else {
            self.expr_statement()
        }
    }

    fn print_statement(&mut self) -> Result<Stmt, CompileError> {
        let expression = self.expression()?;
        self.consume(SEMICOLON)?;
        Ok(Stmt::Print(PrintStmt { expression }))
    }

    fn expr_statement(&mut self) -> Result<Stmt, CompileError> {
        let expression = self.expression()?;
        self.consume(SEMICOLON)?;
        Ok(Stmt::Expr(ExprStmt { expression }))
    }

    fn expression(&mut self) -> Result<Expr, CompileError> {
        self.equality()
    }

    fn equality(&mut self) -> Result<Expr, CompileError> {
        let mut expr = self.comparison()?;
        while self.matches(&[BANG_EQUAL, EQUAL_EQUAL]) {
            let operator = self.previous_token();
            let right = self.comparison()?;
            expr = Expr::Binary(BinaryExpr {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            });
        }
        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Expr, CompileError> {
        let mut expr = self.term()?;
        while self.matches(&[LESS, LESS_EQUAL, GREATER, GREATER_EQUAL]) {
            let operator = self.previous_token();
            let right = self.term()?;
            expr = Expr::Binary(BinaryExpr {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            });
        }
        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr, CompileError> {
        let mut expr = self.factor()?;
        while self.matches(&[MINUS, PLUS]) {
            let operator = self.previous_token();
            let right = self.factor()?;
            expr = Expr::Binary(BinaryExpr {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            });
        }
        Ok(expr)
    }

    fn factor(&mut self) -> Result<Expr, CompileError> {
        let mut expr = self.unary()?;
        while self.matches(&[STAR, SLASH]) {
            let operator = self.previous_token();
            let right = self.unary()?;
            expr = Expr::Binary(BinaryExpr {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            });
        }
        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr, CompileError> {
        if self.matches(&[BANG, MINUS]) {
            let operator = self.previous_token();
            let operand = self.unary()?;
            return Ok(Expr::Unary(UnaryExpr {
                operator,
                operand: Box::new(operand),
            }));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expr, CompileError> {
        if self.matches(&[FALSE, TRUE, NIL, NUMBER, STRING]) {
            let token = self.previous_token();
            return Ok(Expr::Literal(LiteralExpr { token }));
        }
        if self.matches(&[IDENTIFIER]) {
            let name = self.previous_token();
            return Ok(Expr::Variable(VariableExpr { name }));
        }
        if self.matches(&[LEFT_PAREN]) {
            let inner = self.expression()?;
            self.consume(RIGHT_PAREN)?;
            return Ok(Expr::Grouping(GroupingExpr {
                inner: Box::new(inner),
            }));
        }
        let coordinate = self.peek().map(|token| token.coordinate);
        Err(CompileError::new("Unexpected token".to_string(), coordinate))
    }

    fn matches(&mut self, kinds: &[TokenType]) -> bool {
        match self.peek() {
            Some(token) if kinds.contains(&token.kind) => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    /// Consumes the next token if it is `kind`, else raises the spec's two
    /// diagnostic templates: `"Expected token: <KIND>"` when some other token
    /// is there instead, or `"Unexpected end of input"` when construction has
    /// run past `EOF`.
    fn consume(&mut self, kind: TokenType) -> Result<Token, CompileError> {
        match self.peek() {
            Some(token) if token.kind == kind => Ok(self.advance().expect("just peeked Some")),
            Some(token) if token.kind == EOF => Err(CompileError::new(
                "Unexpected end of input".to_string(),
                Some(token.coordinate),
            )),
            Some(token) => Err(CompileError::new(
                format!("Expected token: {kind:?}"),
                Some(token.coordinate),
            )),
            None => Err(CompileError::new(
                "Unexpected end of input".to_string(),
                None,
            )),
        }
    }

    fn advance(&mut self) -> Option<Token> {
        if !self.is_at_end() {
            self.previous = self.tokens.next();
        }
        self.previous.clone()
    }

    fn peek(&mut self) -> Option<&Token> {
        self.tokens.peek()
    }

    fn is_at_end(&mut self) -> bool {
        matches!(self.peek(), None | Some(Token { kind: EOF, .. }))
    }

    fn previous_token(&self) -> Token {
        self.previous
            .clone()
            .expect("a preceding `matches` call guarantees `previous` is set")
    }

    /// Discards tokens until a likely statement boundary: right after a `;`,
    /// or right before a keyword that starts a new statement.
    fn synchronize(&mut self) {
        self.advance();
        while !self.is_at_end() {
            if let Some(previous) = &self.previous {
                if previous.kind == SEMICOLON {
                    return;
                }
            }
            if let Some(token) = self.peek() {
                if matches!(token.kind, CLASS | FUN | VAR | FOR | IF | WHILE | PRINT | RETURN) {
                    return;
                }
            }
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::printer::AstPrinter;
    use crate::tokenizer::scanner::Scanner;

    fn parse(source: &str) -> Result<Vec<Stmt>, Vec<CompileError>> {
        let tokens = Scanner::new(source).scan_tokens().expect("scan should succeed");
        Parser::new(tokens).parse()
    }

    #[test]
    fn parses_print_of_arithmetic_expression() {
        let stmts = parse("print 1 + 2 * 3;").unwrap();
        assert_eq!(stmts.len(), 1);
        match &stmts[0] {
            Stmt::Print(p) => assert_eq!(AstPrinter::print_expr(&p.expression), "(+ Number(1.0) (* Number(2.0) Number(3.0)))"),
            _ => panic!("expected a print statement"),
        }
    }

    #[test]
    fn var_decl_without_initializer_has_none() {
        let stmts = parse("var x;").unwrap();
        match &stmts[0] {
            Stmt::VarDecl(v) => assert!(v.initializer.is_none()),
            _ => panic!("expected a var declaration"),
        }
    }

    #[test]
    fn print_of_parenthesized_identifier_is_a_grouping_not_a_call() {
        let stmts = parse("print (a);").unwrap();
        match &stmts[0] {
            Stmt::Print(p) => assert!(matches!(p.expression, Expr::Grouping(_))),
            _ => panic!("expected a print statement"),
        }
    }

    #[test]
    fn dangling_operator_is_unexpected_token() {
        let errors = parse("!= 1;").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().starts_with("Unexpected token"));
    }

    #[test]
    fn missing_semicolon_reports_the_expected_kind() {
        let errors = parse("print 1 2;").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().starts_with("Expected token: SEMICOLON"));
    }

    #[test]
    fn unclosed_paren_reports_the_expected_kind() {
        let errors = parse("print (1;").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().starts_with("Expected token: RIGHT_PAREN"));
    }

    #[test]
    fn consume_past_eof_reports_unexpected_end_of_input() {
        let errors = parse("var x").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().starts_with("Unexpected end of input"));
    }

    #[test]
    fn multiple_errors_are_collected_across_statement_boundaries() {
        let errors = parse("1 + ; 2 + ;").unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn equality_is_left_associative() {
        let stmts = parse("1 == 2 == 3;").unwrap();
        match &stmts[0] {
            Stmt::Expr(e) => {
                assert_eq!(
                    AstPrinter::print_expr(&e.expression),
                    "(== (== Number(1.0) Number(2.0)) Number(3.0))"
                );
            }
            _ => panic!("expected an expression statement"),
        }
    }
}
