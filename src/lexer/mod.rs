//! Lexical analysis module.
//!
//! This module turns a set of named regex rules into a scanner that splits
//! text into tokens. It handles:
//!
//! - Ordering rules by priority and registration order
//! - Compiling all rules into a single alternation regex
//! - Scanning input left to right, one match at a time
//! - Reporting every unmatched character as its own `UNRECOGNIZED` token
//! - Optionally dropping whitespace tokens

pub mod lexer;
pub mod rules;
pub mod scanner;
pub mod tokens;
