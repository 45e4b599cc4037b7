use std::sync::Arc;

use tracing::{trace, warn};

use crate::{Span, MK_TOKEN};

use super::{
    rules::{CompiledRules, Matcher},
    tokens::{Token, TokenType},
};

/// Cursor state for a single scan. Nothing here outlives the call to [`scan`].
struct Scanner<'a> {
    compiled: &'a CompiledRules,
    source: &'a str,
    pos: usize,
    include_whitespace: bool,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    fn new(compiled: &'a CompiledRules, source: &'a str, include_whitespace: bool) -> Self {
        Scanner {
            compiled,
            source,
            pos: 0,
            include_whitespace,
            tokens: vec![],
        }
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Byte offset just past the character under the cursor.
    fn next_boundary(&self) -> usize {
        self.source[self.pos..]
            .chars()
            .next()
            .map_or(self.source.len(), |c| self.pos + c.len_utf8())
    }

    /// Emits one `UNRECOGNIZED` token per character up to `end`.
    fn unrecognised_until(&mut self, end: usize) {
        if end <= self.pos {
            return;
        }

        trace!(start = self.pos, end, "unrecognised input");

        let start = self.pos;
        for (offset, c) in self.source[start..end].char_indices() {
            let span = Span {
                start: start + offset,
                end: start + offset + c.len_utf8(),
            };
            self.push(MK_TOKEN!(TokenType::Unrecognized, c.to_string(), span));
        }

        self.pos = end;
    }

    fn run(&mut self) {
        let compiled = self.compiled;
        let source = self.source;

        let regex = match compiled.matcher() {
            Matcher::Never => {
                self.unrecognised_until(source.len());
                return;
            }
            Matcher::Alternation(regex) => regex,
        };

        while !self.at_eof() {
            let Some(captures) = regex.captures_at(source, self.pos) else {
                break;
            };
            let Some(whole) = captures.get(0) else {
                break;
            };

            self.unrecognised_until(whole.start());

            if whole.is_empty() {
                // A context-dependent pattern (e.g. a bare `\b`) matched
                // nothing; give up the next character to keep moving.
                warn!(pos = self.pos, "zero-width match, skipping one character");
                let end = self.next_boundary();
                self.unrecognised_until(end);
                continue;
            }

            let span = Span {
                start: whole.start(),
                end: whole.end(),
            };

            match compiled.rule_for(&captures) {
                Some(rule) => {
                    let is_whitespace = rule.name.as_ref() == compiled.whitespace_class();
                    if !is_whitespace || self.include_whitespace {
                        let token_type = TokenType::Rule(Arc::clone(&rule.name));
                        self.push(MK_TOKEN!(token_type, whole.as_str().to_string(), span));
                    }
                    self.pos = whole.end();
                }
                None => self.unrecognised_until(whole.end()),
            }
        }

        self.unrecognised_until(self.source.len());
    }
}

/// Splits `input` into tokens using `compiled`.
///
/// With `include_whitespace` set, the lexemes of the returned tokens
/// concatenate back to `input` exactly. Without it, tokens of the whitespace
/// class are dropped and everything else is unchanged.
pub fn scan(compiled: &CompiledRules, input: &str, include_whitespace: bool) -> Vec<Token> {
    let mut scanner = Scanner::new(compiled, input, include_whitespace);
    scanner.run();
    scanner.tokens
}
