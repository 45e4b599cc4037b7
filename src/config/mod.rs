//! Rule files.
//!
//! Reads a sectioned text file of `NAME = pattern` rules, priorities and
//! options into a [`RuleSet`](crate::lexer::rules::RuleSet).

pub mod config;
