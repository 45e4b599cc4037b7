use std::sync::Arc;

use crate::errors::errors::Error;

use super::{
    rules::{CompiledRules, RuleSet},
    scanner::scan,
    tokens::Token,
};

/// A [`RuleSet`] together with its most recent compilation.
///
/// Any mutation drops the cached [`CompiledRules`]; the next call to
/// [`Lexer::compiled`] rebuilds it. Snapshots already handed out are
/// unaffected, so scans running on another thread keep their configuration.
#[derive(Debug, Clone, Default)]
pub struct Lexer {
    rules: RuleSet,
    compiled: Option<Arc<CompiledRules>>,
}

impl From<RuleSet> for Lexer {
    fn from(rules: RuleSet) -> Self {
        Lexer {
            rules,
            compiled: None,
        }
    }
}

impl Lexer {
    pub fn new<I, N, P>(rules: I) -> Lexer
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: Into<String>,
    {
        Lexer::from(RuleSet::new().with_rules(rules))
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.rules
    }

    pub fn set_rules<I, N, P>(&mut self, rules: I)
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: Into<String>,
    {
        self.rules.set_rules(rules);
        self.compiled = None;
    }

    pub fn set_priority<I, N>(&mut self, priorities: I)
    where
        I: IntoIterator<Item = (N, i32)>,
        N: Into<String>,
    {
        self.rules.set_priority(priorities);
        self.compiled = None;
    }

    pub fn set_whitespace_class(&mut self, name: impl Into<String>) {
        self.rules.set_whitespace_class(name);
        self.compiled = None;
    }

    pub fn compiled(&mut self) -> Result<Arc<CompiledRules>, Error> {
        if let Some(compiled) = &self.compiled {
            return Ok(Arc::clone(compiled));
        }

        let compiled = Arc::new(self.rules.compile()?);
        self.compiled = Some(Arc::clone(&compiled));
        Ok(compiled)
    }

    pub fn tokenize(&mut self, input: &str, include_whitespace: bool) -> Result<Vec<Token>, Error> {
        let compiled = self.compiled()?;
        Ok(scan(&compiled, input, include_whitespace))
    }
}
