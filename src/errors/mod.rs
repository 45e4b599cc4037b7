//! Error types and error handling for the lexer.
//!
//! This module defines the errors raised while building a rule set:
//!
//! - Error structures with optional rule-file position information
//! - Specific error variants for pattern compilation and rule-file parsing
//! - Helpful error messages and suggestions
//!
//! Unrecognised input is never an error; it is reported as tokens.

pub mod errors;
