use std::{fmt::Display, sync::Arc};

use crate::Span;

use super::rules::UNRECOGNIZED;

/// Category label of a lexeme: the name of the rule that matched it, or
/// `UNRECOGNIZED` for a character no rule matched.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum TokenType {
    Rule(Arc<str>),
    Unrecognized,
}

impl TokenType {
    pub fn as_str(&self) -> &str {
        match self {
            TokenType::Rule(name) => name,
            TokenType::Unrecognized => UNRECOGNIZED,
        }
    }
}

impl Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<str> for TokenType {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TokenType {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    pub lexeme: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:?})", self.token_type, self.lexeme)
    }
}

impl Token {
    pub fn is_unrecognized(&self) -> bool {
        self.token_type == TokenType::Unrecognized
    }

    /// `(lexeme, token_type)` view of the token.
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.lexeme, self.token_type.as_str())
    }
}
