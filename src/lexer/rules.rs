//! Rule compilation.
//!
//! A [`RuleSet`] is the caller-facing configuration: named patterns in
//! registration order plus per-name priorities. [`RuleSet::compile`] turns it
//! into an immutable [`CompiledRules`] holding the ordered rule list and one
//! alternation regex whose alternatives appear in exactly that order.

use std::{
    cmp::Reverse,
    collections::{HashMap, HashSet},
    sync::Arc,
};

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;

use crate::errors::errors::{Error, ErrorImpl};

/// Token type emitted for characters no rule matches.
pub const UNRECOGNIZED: &str = "UNRECOGNIZED";

/// Rule name whose matches are dropped unless whitespace is requested.
pub const DEFAULT_WHITESPACE: &str = "WHITESPACE";

const GROUP_PREFIX: &str = "__lexer_rule_";

/// Reported as the rule when only the whole alternation fails to build.
const COMBINED: &str = "<combined>";

lazy_static! {
    static ref RESERVED_NAMES: Vec<&'static str> = vec![UNRECOGNIZED, ""];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub name: Arc<str>,
    pub pattern: String,
    pub priority: i32,
}

#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Name and pattern, in first-registration order.
    patterns: Vec<(String, String)>,
    priorities: HashMap<String, i32>,
    whitespace: String,
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet {
            patterns: vec![],
            priorities: HashMap::new(),
            whitespace: String::from(DEFAULT_WHITESPACE),
        }
    }
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers patterns by name. A name that is already registered keeps
    /// its slot in the registration order and only has its pattern replaced.
    pub fn set_rules<I, N, P>(&mut self, rules: I)
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: Into<String>,
    {
        for (name, pattern) in rules {
            let name = name.into();
            let pattern = pattern.into();

            match self.patterns.iter_mut().find(|(existing, _)| *existing == name) {
                Some(entry) => entry.1 = pattern,
                None => self.patterns.push((name, pattern)),
            }
        }
    }

    /// Sets priorities by name. Names that are not registered yet keep the
    /// priority until they are.
    pub fn set_priority<I, N>(&mut self, priorities: I)
    where
        I: IntoIterator<Item = (N, i32)>,
        N: Into<String>,
    {
        for (name, priority) in priorities {
            self.priorities.insert(name.into(), priority);
        }
    }

    pub fn set_whitespace_class(&mut self, name: impl Into<String>) {
        self.whitespace = name.into();
    }

    pub fn with_rules<I, N, P>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: Into<String>,
    {
        self.set_rules(rules);
        self
    }

    pub fn with_priority<I, N>(mut self, priorities: I) -> Self
    where
        I: IntoIterator<Item = (N, i32)>,
        N: Into<String>,
    {
        self.set_priority(priorities);
        self
    }

    pub fn with_whitespace_class(mut self, name: impl Into<String>) -> Self {
        self.set_whitespace_class(name);
        self
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn pattern(&self, name: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, pattern)| pattern.as_str())
    }

    pub fn priority(&self, name: &str) -> i32 {
        self.priorities.get(name).copied().unwrap_or(0)
    }

    pub fn whitespace_class(&self) -> &str {
        &self.whitespace
    }

    /// Rules by descending priority; equal priorities keep registration order.
    pub fn ordered(&self) -> Vec<Rule> {
        let mut rules = self
            .patterns
            .iter()
            .map(|(name, pattern)| Rule {
                name: Arc::from(name.as_str()),
                pattern: pattern.clone(),
                priority: self.priority(name),
            })
            .collect::<Vec<Rule>>();

        // sort_by_key is stable
        rules.sort_by_key(|rule| Reverse(rule.priority));
        rules
    }

    pub fn compile(&self) -> Result<CompiledRules, Error> {
        let rules = self.ordered();

        let mut declared = HashSet::new();
        let mut alternatives = vec![];
        for (index, rule) in rules.iter().enumerate() {
            alternatives.push(validate_rule(index, rule, &mut declared)?);
        }

        let matcher = if rules.is_empty() {
            Matcher::Never
        } else {
            // Every alternative compiled on its own above; only engine
            // limits on the whole alternation can fail here.
            let regex = Regex::new(&alternatives.join("|")).map_err(|err| {
                Error::new(
                    ErrorImpl::InvalidPattern {
                        rule: String::from(COMBINED),
                        cause: err.to_string(),
                    },
                    None,
                )
            })?;

            Matcher::Alternation(regex)
        };

        let groups = matcher.rule_groups();

        let order = rules.iter().map(|rule| rule.name.as_ref()).collect::<Vec<&str>>();
        debug!(rules = rules.len(), ?order, "compiled rule set");

        Ok(CompiledRules {
            rules,
            groups,
            matcher,
            whitespace: Arc::from(self.whitespace.as_str()),
        })
    }
}

fn invalid_pattern(rule: &Rule, cause: String) -> Error {
    Error::new(
        ErrorImpl::InvalidPattern {
            rule: rule.name.to_string(),
            cause,
        },
        None,
    )
}

/// Checks one rule and returns its tagged alternative for the combined
/// matcher. `declared` collects the inner capture names of earlier rules,
/// which must stay unique across the whole alternation.
fn validate_rule(index: usize, rule: &Rule, declared: &mut HashSet<String>) -> Result<String, Error> {
    if RESERVED_NAMES.iter().any(|reserved| *reserved == rule.name.as_ref()) {
        return Err(Error::new(
            ErrorImpl::ReservedRuleName {
                rule: rule.name.to_string(),
            },
            None,
        ));
    }

    let regex = Regex::new(&rule.pattern).map_err(|err| invalid_pattern(rule, err.to_string()))?;

    if regex.is_match("") {
        return Err(Error::new(
            ErrorImpl::EmptyMatch {
                rule: rule.name.to_string(),
            },
            None,
        ));
    }

    for name in regex.capture_names().flatten() {
        if name.starts_with(GROUP_PREFIX) {
            return Err(invalid_pattern(
                rule,
                format!("capture group names starting with `{}` are reserved", GROUP_PREFIX),
            ));
        }
        if !declared.insert(name.to_string()) {
            return Err(invalid_pattern(
                rule,
                format!("capture group name `{}` is already used by an earlier rule", name),
            ));
        }
    }

    // Catches patterns that only break once wrapped, e.g. a `(?x)` comment
    // running into the closing parenthesis.
    let alternative = format!("(?P<{}{}>{})", GROUP_PREFIX, index, rule.pattern);
    Regex::new(&alternative).map_err(|err| invalid_pattern(rule, err.to_string()))?;

    Ok(alternative)
}

#[derive(Debug, Clone)]
pub enum Matcher {
    /// Matches nothing; the compiled form of an empty rule set.
    Never,
    Alternation(Regex),
}

impl Matcher {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Matcher::Never => None,
            Matcher::Alternation(regex) => Some(regex.as_str()),
        }
    }

    pub fn is_never(&self) -> bool {
        matches!(self, Matcher::Never)
    }

    /// Capture group index of each rule, in rule order.
    fn rule_groups(&self) -> Vec<usize> {
        match self {
            Matcher::Never => vec![],
            Matcher::Alternation(regex) => regex
                .capture_names()
                .enumerate()
                .filter_map(|(index, name)| {
                    name.filter(|name| name.starts_with(GROUP_PREFIX))
                        .map(|_| index)
                })
                .collect(),
        }
    }
}

/// Immutable result of compiling a [`RuleSet`].
#[derive(Debug, Clone)]
pub struct CompiledRules {
    rules: Vec<Rule>,
    groups: Vec<usize>,
    matcher: Matcher,
    whitespace: Arc<str>,
}

impl CompiledRules {
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name.as_ref()).collect()
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn whitespace_class(&self) -> &str {
        &self.whitespace
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The earliest rule in precedence order whose alternative took part in
    /// the match.
    pub(crate) fn rule_for(&self, captures: &Captures) -> Option<&Rule> {
        self.groups
            .iter()
            .position(|group| captures.get(*group).is_some())
            .map(|index| &self.rules[index])
    }
}
