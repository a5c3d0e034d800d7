//! The purpose of this file is to define a scanner that takes a string and tokenizes it

use super::token::{Coordinate, Literal, Token};
use super::token_type::TokenType;
use crate::diagnostics::CompileError;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::iter::Peekable;
use std::str::CharIndices;
use TokenType::*;

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, TokenType> = {
        let mut h = HashMap::new();
        h.insert("and", AND);
        h.insert("class", CLASS);
        h.insert("else", ELSE);
        h.insert("false", FALSE);
        h.insert("for", FOR);
        h.insert("fun", FUN);
        h.insert("if", IF);
        h.insert("nil", NIL);
        h.insert("or", OR);
        h.insert("print", PRINT);
        h.insert("return", RETURN);
        h.insert("super", SUPER);
        h.insert("this", THIS);
        h.insert("true", TRUE);
        h.insert("var", VAR);
        h.insert("while", WHILE);
        h
    };
}

/// Turns a source string into an ordered token sequence, terminated by `EOF`.
///
/// Scanning halts at the first lexical error: an unrecognized character or
/// an unterminated string.
pub struct Scanner<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    start: usize,
    current: usize,
    line: usize,
    /// 1-based column of the next character to be consumed
    col: usize,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            start: 0,
            current: 0,
            line: 1,
            col: 1,
            tokens: Vec::new(),
        }
    }

    pub fn scan_tokens(mut self) -> Result<Vec<Token>, CompileError> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_single_token()?;
        }
        let eof_coordinate = self.coordinate_here();
        self.tokens.push(Token::new(EOF, "", eof_coordinate));
        Ok(self.tokens)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn coordinate_here(&self) -> Coordinate {
        Coordinate {
            line: self.line,
            offset: self.col,
        }
    }

    fn current_lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn peek_next(&self) -> Option<char> {
        self.source[self.current..].chars().nth(1)
    }

    /// Consumes one char, advancing `current`/`line`/`col`
    fn advance(&mut self) -> Option<char> {
        let (_, c) = self.chars.next()?;
        self.current += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    fn next_match(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn add_token(&mut self, start: Coordinate, kind: TokenType) {
        let lexeme = self.current_lexeme().to_string();
        self.tokens.push(Token::new(kind, lexeme, start));
    }

    fn scan_single_token(&mut self) -> Result<(), CompileError> {
        let start = self.coordinate_here();
        let c = self
            .advance()
            .expect("scan_tokens only loops while input remains");
        match c {
            '(' => self.add_token(start, LEFT_PAREN),
            ')' => self.add_token(start, RIGHT_PAREN),
            '{' => self.add_token(start, LEFT_BRACE),
            '}' => self.add_token(start, RIGHT_BRACE),
            ',' => self.add_token(start, COMMA),
            '-' => self.add_token(start, MINUS),
            '+' => self.add_token(start, PLUS),
            ';' => self.add_token(start, SEMICOLON),
            '*' => self.add_token(start, STAR),
            ' ' | '\t' | '\r' | '\n' => {}
            '!' => {
                let kind = if self.next_match('=') { BANG_EQUAL } else { BANG };
                self.add_token(start, kind);
            }
            '=' => {
                let kind = if self.next_match('=') { EQUAL_EQUAL } else { EQUAL };
                self.add_token(start, kind);
            }
            '<' => {
                let kind = if self.next_match('=') { LESS_EQUAL } else { LESS };
                self.add_token(start, kind);
            }
            '>' => {
                let kind = if self.next_match('=') { GREATER_EQUAL } else { GREATER };
                self.add_token(start, kind);
            }
            '/' => {
                if self.next_match('/') {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                } else {
                    self.add_token(start, SLASH);
                }
            }
            '"' => self.scan_string(start)?,
            '.' if matches!(self.peek(), Some(c) if c.is_ascii_digit()) => {
                self.scan_number(start);
            }
            '.' => self.add_token(start, DOT),
            c if c.is_ascii_digit() => self.scan_number(start),
            c if c == '_' || c.is_alphabetic() => self.scan_identifier(start),
            unexpected => {
                return Err(CompileError::new(
                    format!("Unexpected character '{unexpected}'"),
                    Some(start),
                ));
            }
        }
        Ok(())
    }

    /// Scans up to the closing `"`, omitting both quotes from the literal.
    /// Strings may span multiple lines; there is no escape processing.
    fn scan_string(&mut self, start: Coordinate) -> Result<(), CompileError> {
        loop {
            match self.advance() {
                Some('"') => {
                    let lexeme = self.current_lexeme().to_string();
                    let body = lexeme[1..lexeme.len() - 1].to_string();
                    self.tokens
                        .push(Token::with_literal(STRING, lexeme, Literal::Str(body), start));
                    return Ok(());
                }
                Some(_) => continue,
                None => {
                    let here = self.coordinate_here();
                    return Err(CompileError::new("Unterminated string".to_string(), Some(here)));
                }
            }
        }
    }

    /// Scans a digit run with an optional fractional part. Called either with
    /// the leading digit already consumed, or with a leading `.` (followed by
    /// a digit) already consumed.
    fn scan_number(&mut self, start: Coordinate) {
        let mut seen_dot = self.current_lexeme() == ".";
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else if c == '.'
                && !seen_dot
                && matches!(self.peek_next(), Some(d) if d.is_ascii_digit())
            {
                seen_dot = true;
                self.advance();
            } else {
                break;
            }
        }
        let value: f64 = self
            .current_lexeme()
            .parse()
            .expect("scanner only consumes characters that form a valid number literal");
        self.tokens.push(Token::with_literal(
            NUMBER,
            self.current_lexeme().to_string(),
            Literal::Number(value),
            start,
        ));
    }

    fn scan_identifier(&mut self, start: Coordinate) {
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.advance();
        }
        let text = self.current_lexeme();
        match KEYWORDS.get(text) {
            Some(TRUE) => {
                self.tokens.push(Token::with_literal(
                    TRUE,
                    text.to_string(),
                    Literal::Bool(true),
                    start,
                ));
            }
            Some(FALSE) => {
                self.tokens.push(Token::with_literal(
                    FALSE,
                    text.to_string(),
                    Literal::Bool(false),
                    start,
                ));
            }
            Some(kind) => self.add_token(start, *kind),
            None => self.add_token(start, IDENTIFIER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> Vec<Token> {
        Scanner::new(source).scan_tokens().expect("scan should succeed")
    }

    #[test]
    fn single_and_double_char_operators() {
        let tokens = scan("!*+-/= = = +=<> <=");
        let kinds: Vec<TokenType> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BANG, STAR, PLUS, MINUS, SLASH, EQUAL, EQUAL, EQUAL, PLUS, EQUAL, LESS, GREATER,
                LESS_EQUAL, EOF
            ]
        );
    }

    #[test]
    fn always_terminates_with_eof() {
        let tokens = scan("1 + 2");
        assert_eq!(tokens.last().unwrap().kind, EOF);
    }

    #[test]
    fn line_comment_is_skipped() {
        let tokens = scan("1 // a comment\n2");
        let kinds: Vec<TokenType> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![NUMBER, NUMBER, EOF]);
        assert_eq!(tokens[1].coordinate.line, 2);
    }

    #[test]
    fn string_literal_strips_quotes_and_allows_newlines() {
        let tokens = scan("\"hi\nthere\"");
        assert_eq!(tokens[0].kind, STRING);
        assert_eq!(
            tokens[0].literal,
            Some(Literal::Str("hi\nthere".to_string()))
        );
    }

    #[test]
    fn unterminated_string_is_a_lexical_error() {
        let err = Scanner::new("\"unterminated").scan_tokens().unwrap_err();
        assert_eq!(err.to_string(), "Unterminated string at (1:14)");
    }

    #[test]
    fn number_literal_decodes_as_double() {
        let tokens = scan("123.64");
        assert_eq!(tokens[0].literal, Some(Literal::Number(123.64)));
    }

    #[test]
    fn leading_dot_number_starts_at_the_dot() {
        let tokens = scan(".5");
        assert_eq!(tokens[0].kind, NUMBER);
        assert_eq!(tokens[0].lexeme, ".5");
        assert_eq!(tokens[0].literal, Some(Literal::Number(0.5)));
    }

    #[test]
    fn bare_dot_is_its_own_token() {
        let tokens = scan("a.b");
        let kinds: Vec<TokenType> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![IDENTIFIER, DOT, IDENTIFIER, EOF]);
    }

    #[test]
    fn keyword_not_as_a_prefix() {
        let tokens = scan("and or not_a_keyword");
        let kinds: Vec<TokenType> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![AND, OR, IDENTIFIER, EOF]);
    }

    #[test]
    fn true_and_false_carry_boolean_literals() {
        let tokens = scan("true false");
        assert_eq!(tokens[0].literal, Some(Literal::Bool(true)));
        assert_eq!(tokens[1].literal, Some(Literal::Bool(false)));
    }

    #[test]
    fn nil_carries_no_literal() {
        let tokens = scan("nil");
        assert_eq!(tokens[0].literal, None);
    }

    #[test]
    fn unexpected_character_is_a_lexical_error() {
        let err = Scanner::new("@").scan_tokens().unwrap_err();
        assert_eq!(err.to_string(), "Unexpected character '@' at (1:1)");
    }

    #[test]
    fn coordinates_are_one_based_and_track_lines() {
        let tokens = scan("1\n  22");
        assert_eq!(tokens[0].coordinate, Coordinate { line: 1, offset: 1 });
        assert_eq!(tokens[1].coordinate, Coordinate { line: 2, offset: 3 });
    }
}
