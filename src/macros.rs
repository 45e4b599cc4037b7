//! Utility macros for the lexer.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULES!` - Creates a RuleSet from `NAME => pattern` pairs
//!
//! These macros reduce boilerplate in the scanner and in tests.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$type` - The TokenType
/// * `$lexeme` - The matched text
/// * `$span` - The byte span in the input
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenType::Unrecognized, "@".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($type:expr, $lexeme:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            token_type: $type,
            lexeme: $lexeme,
            span: $span,
        }
    };
}

/// Creates a RuleSet, registering the rules in the order written.
///
/// # Example
///
/// ```
/// use lexer::MK_RULES;
///
/// let rules = MK_RULES! {
///     FLOAT => r"\d+\.\d+",
///     NUMBER => r"\d+",
/// };
/// assert_eq!(rules.pattern("NUMBER"), Some(r"\d+"));
/// ```
#[macro_export]
macro_rules! MK_RULES {
    () => {
        $crate::lexer::rules::RuleSet::new()
    };
    ($($name:ident => $pattern:expr),+ $(,)?) => {
        $crate::lexer::rules::RuleSet::new().with_rules([
            $((stringify!($name), $pattern)),+
        ])
    };
}
