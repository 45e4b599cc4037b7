#![allow(clippy::module_inception)]

use std::{fmt::Display, sync::Arc};

pub mod config;
pub mod display;
pub mod errors;
pub mod lexer;
pub mod macros;

/// A 1-based line in a rule file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Arc<String>);

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

/// Byte range of a lexeme in the scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::{Position, Span};

    #[test]
    fn test_position_display() {
        let position = Position(12, std::sync::Arc::new(String::from("rules.lex")));
        assert_eq!(position.to_string(), "rules.lex:12");
    }

    #[test]
    fn test_span_len() {
        let span = Span { start: 3, end: 7 };
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
        assert!(Span { start: 2, end: 2 }.is_empty());
    }
}
