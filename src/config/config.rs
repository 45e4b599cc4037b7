use std::{fs, path::Path, sync::Arc};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::rules::RuleSet,
    Position,
};

lazy_static! {
    static ref SECTION: Regex = Regex::new(r"^\[\s*([A-Za-z_]+)\s*\]$").unwrap();
    static ref ENTRY: Regex = Regex::new(r"^([^=\s]+)\s*=(.*)$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Rules,
    Priority,
    Options,
}

impl Section {
    fn from_name(name: &str) -> Option<Section> {
        match name.to_ascii_lowercase().as_str() {
            "rules" => Some(Section::Rules),
            "priority" | "priorities" => Some(Section::Priority),
            "options" => Some(Section::Options),
            _ => None,
        }
    }
}

/// Parses a rule file.
///
/// ```text
/// [rules]
/// FLOAT = \d+\.\d+
/// NUMBER = \d+
///
/// [priority]
/// FLOAT = 1
///
/// [options]
/// whitespace = WHITESPACE
/// ```
///
/// Blank lines and lines starting with `#` are skipped. Entries before the
/// first section header belong to `[rules]`. Patterns are not checked here;
/// that happens when the rule set is compiled.
pub fn parse_config(source: &str, file: Option<String>) -> Result<RuleSet, Error> {
    let file = Arc::new(file.unwrap_or_else(|| String::from("<rules>")));
    let mut rules = RuleSet::new();
    let mut section = Section::Rules;

    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim();
        let position = || Some(Position(index as u32 + 1, Arc::clone(&file)));

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(captures) = SECTION.captures(line) {
            let name = &captures[1];
            section = Section::from_name(name).ok_or_else(|| {
                Error::new(
                    ErrorImpl::UnknownSection {
                        section: name.to_string(),
                    },
                    position(),
                )
            })?;
            continue;
        }

        let Some(captures) = ENTRY.captures(line) else {
            return Err(Error::new(
                ErrorImpl::MalformedLine {
                    text: line.to_string(),
                },
                position(),
            ));
        };
        let key = captures[1].to_string();
        let value = captures[2].trim();

        match section {
            Section::Rules => rules.set_rules([(key, value)]),
            Section::Priority => {
                let priority = value.parse::<i32>().map_err(|_| {
                    Error::new(
                        ErrorImpl::InvalidPriority {
                            rule: key.clone(),
                            value: value.to_string(),
                        },
                        position(),
                    )
                })?;
                rules.set_priority([(key, priority)]);
            }
            Section::Options => match key.as_str() {
                "whitespace" => rules.set_whitespace_class(value),
                _ => {
                    return Err(Error::new(
                        ErrorImpl::MalformedLine {
                            text: line.to_string(),
                        },
                        position(),
                    ))
                }
            },
        }
    }

    debug!(file = %file, rules = rules.len(), "parsed rule file");
    Ok(rules)
}

/// Reads a rule file's text, for callers that also want to quote from it.
pub fn read_source(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|err| {
        Error::new(
            ErrorImpl::FileError {
                path: path.display().to_string(),
                cause: err.to_string(),
            },
            None,
        )
    })
}

pub fn load_config(path: &Path) -> Result<RuleSet, Error> {
    let source = read_source(path)?;
    parse_config(&source, Some(path.display().to_string()))
}
