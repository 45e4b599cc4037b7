use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Option<Position>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Option<Position>) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    /// The rule the error was raised for, if it concerns a single rule.
    pub fn get_rule(&self) -> Option<&str> {
        match &self.internal_error {
            ErrorImpl::InvalidPattern { rule, .. }
            | ErrorImpl::EmptyMatch { rule }
            | ErrorImpl::ReservedRuleName { rule }
            | ErrorImpl::InvalidPriority { rule, .. } => Some(rule.as_str()),
            _ => None,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidPattern { .. } => "InvalidPattern",
            ErrorImpl::EmptyMatch { .. } => "EmptyMatch",
            ErrorImpl::ReservedRuleName { .. } => "ReservedRuleName",
            ErrorImpl::MalformedLine { .. } => "MalformedLine",
            ErrorImpl::UnknownSection { .. } => "UnknownSection",
            ErrorImpl::InvalidPriority { .. } => "InvalidPriority",
            ErrorImpl::FileError { .. } => "FileError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidPattern { rule, .. } => ErrorTip::Suggestion(format!(
                "Check the pattern registered for `{}`, it is not a valid regular expression",
                rule
            )),
            ErrorImpl::EmptyMatch { rule } => ErrorTip::Suggestion(format!(
                "Pattern for `{}` can match the empty string, use `+` instead of `*`?",
                rule
            )),
            ErrorImpl::ReservedRuleName { rule } => {
                ErrorTip::Suggestion(format!("`{}` cannot be used as a rule name", rule))
            }
            ErrorImpl::MalformedLine { .. } => ErrorTip::Suggestion(String::from(
                "Expected `NAME = VALUE` or a `[section]` header",
            )),
            ErrorImpl::UnknownSection { section } => ErrorTip::Suggestion(format!(
                "Unknown section `[{}]`, expected one of `[rules]`, `[priority]`, `[options]`",
                section
            )),
            ErrorImpl::InvalidPriority { value, .. } => {
                ErrorTip::Suggestion(format!("Priority `{}` is not an integer", value))
            }
            ErrorImpl::FileError { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.position {
            Some(position) => write!(f, "{}: {}", position, self.internal_error),
            None => write!(f, "{}", self.internal_error),
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("invalid pattern for rule {rule:?}: {cause}")]
    InvalidPattern { rule: String, cause: String },
    #[error("pattern for rule {rule:?} matches the empty string")]
    EmptyMatch { rule: String },
    #[error("rule name {rule:?} is reserved")]
    ReservedRuleName { rule: String },
    #[error("malformed line: {text:?}")]
    MalformedLine { text: String },
    #[error("unknown section {section:?}")]
    UnknownSection { section: String },
    #[error("invalid priority for rule {rule:?}: {value:?}")]
    InvalidPriority { rule: String, value: String },
    #[error("could not read {path:?}: {cause}")]
    FileError { path: String, cause: String },
}
