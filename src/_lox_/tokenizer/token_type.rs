//! Definitions for Token kinds
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    LEFT_PAREN,    // (
    RIGHT_PAREN,   // )
    LEFT_BRACE,    // {
    RIGHT_BRACE,   // }
    COMMA,         // ,
    DOT,           // .
    MINUS,         // -
    PLUS,          // +
    SEMICOLON,     // ;
    SLASH,         // /
    STAR,          // *
    BANG,          // !
    BANG_EQUAL,    // !=
    EQUAL,         // =
    EQUAL_EQUAL,   // ==
    GREATER,       // >
    GREATER_EQUAL, // >=
    LESS,          // <
    LESS_EQUAL,    // <=

    // Literals
    IDENTIFIER,
    STRING,
    NUMBER,

    // Keywords
    AND,
    CLASS,
    ELSE,
    FALSE,
    FUN,
    FOR,
    IF,
    NIL,
    OR,
    PRINT,
    RETURN,
    SUPER,
    THIS,
    TRUE,
    VAR,
    WHILE,

    EOF,
}

use TokenType::*;
impl TokenType {
    /// True for the token kinds that may start a `primary` production
    pub fn is_primary(&self) -> bool {
        matches!(self, NUMBER | STRING | TRUE | FALSE | NIL | IDENTIFIER)
    }
}

#[cfg(test)]
mod token_type_tests {
    use super::*;
    #[test]
    fn is_primary_covers_literals_keywords_and_identifiers() {
        assert!(STRING.is_primary());
        assert!(IDENTIFIER.is_primary());
        assert!(NUMBER.is_primary());
        assert!(TRUE.is_primary());
        assert!(FALSE.is_primary());
        assert!(NIL.is_primary());
        assert!(!PLUS.is_primary());
        assert!(!EOF.is_primary());
    }
}
