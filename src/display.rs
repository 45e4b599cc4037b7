//! Plain-text presentation of scan results and errors.

use crate::{
    errors::errors::{Error, ErrorTip},
    lexer::{rules::CompiledRules, scanner::scan, tokens::Token},
};

const LEXEME_HEADER: &str = "Lexemes";
const TOKEN_HEADER: &str = "Tokens";

/// Renders tokens as a two-column `Lexemes | Tokens` table.
///
/// Lexemes are escaped so control characters stay on one row.
pub fn render_table(tokens: &[Token]) -> String {
    let rows = tokens
        .iter()
        .map(|token| (token.lexeme.escape_debug().to_string(), token.token_type.as_str()))
        .collect::<Vec<(String, &str)>>();

    let lexeme_width = rows
        .iter()
        .map(|(lexeme, _)| lexeme.chars().count())
        .chain(std::iter::once(LEXEME_HEADER.len()))
        .max()
        .unwrap_or(0);
    let token_width = rows
        .iter()
        .map(|(_, token_type)| token_type.chars().count())
        .chain(std::iter::once(TOKEN_HEADER.len()))
        .max()
        .unwrap_or(0);

    let mut table = format!("{:<lexeme_width$} | {}\n", LEXEME_HEADER, TOKEN_HEADER);
    table.push_str(&format!("{:-<lexeme_width$}-+-{:-<token_width$}\n", "", ""));

    for (lexeme, token_type) in rows {
        table.push_str(&format!("{:<lexeme_width$} | {}\n", lexeme, token_type));
    }

    table
}

/// Scans `input` and renders the input line followed by its token table.
pub fn analyze(compiled: &CompiledRules, input: &str, include_whitespace: bool) -> String {
    let tokens = scan(compiled, input, include_whitespace);
    format!("Input: {}\n\nTokens:\n{}", input, render_table(&tokens))
}

/// Formats an error, quoting the offending line of `source` when the error
/// carries a position.
pub fn display_error(error: &Error, source: Option<&str>) -> String {
    /*
        Error: MalformedLine (Expected `NAME = VALUE` or a `[section]` header)
          malformed line: "NUMBER \\d+"
        -> rules.lex
           |
         3 | NUMBER \d+
           |
    */

    let mut out = match error.get_tip() {
        ErrorTip::None => format!("Error: {}\n", error.get_error_name()),
        tip => format!("Error: {} ({})\n", error.get_error_name(), tip),
    };
    out.push_str(&format!("  {}\n", error.kind()));

    let Some(position) = error.get_position() else {
        return out;
    };
    out.push_str(&format!("-> {}\n", position.1));

    let line_text = source.and_then(|source| {
        source
            .lines()
            .nth((position.0 as usize).saturating_sub(1))
    });

    if let Some(line_text) = line_text {
        let line_string = position.0.to_string();
        let padding = line_string.len() + 2;

        out.push_str(&format!("{:>padding$}\n", "|"));
        out.push_str(&format!("{} | {}\n", line_string, line_text.trim()));
        out.push_str(&format!("{:>padding$}\n", "|"));
    }

    out
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{analyze, display_error, render_table};
    use crate::{
        errors::errors::{Error, ErrorImpl},
        lexer::{rules::RuleSet, scanner::scan},
        Position,
    };

    #[test]
    fn test_render_table() {
        let compiled = RuleSet::new()
            .with_rules([("NUMBER", r"\d+"), ("WHITESPACE", r"\s+")])
            .compile()
            .unwrap();
        let tokens = scan(&compiled, "12 x", false);

        assert_eq!(
            render_table(&tokens),
            "Lexemes | Tokens\n\
             --------+-------------\n\
             12      | NUMBER\n\
             x       | UNRECOGNIZED\n"
        );
    }

    #[test]
    fn test_render_table_escapes_newlines() {
        let compiled = RuleSet::new()
            .with_rules([("WHITESPACE", r"\s+")])
            .compile()
            .unwrap();
        let tokens = scan(&compiled, "\n", true);

        assert!(render_table(&tokens).contains("\\n      | WHITESPACE\n"));
    }

    #[test]
    fn test_render_empty_table() {
        assert_eq!(render_table(&[]), "Lexemes | Tokens\n--------+-------\n");
    }

    #[test]
    fn test_analyze() {
        let compiled = RuleSet::new().compile().unwrap();
        let output = analyze(&compiled, "a", false);

        assert!(output.starts_with("Input: a\n\nTokens:\n"));
        assert!(output.ends_with("a       | UNRECOGNIZED\n"));
    }

    #[test]
    fn test_display_error_quotes_line() {
        let error = Error::new(
            ErrorImpl::MalformedLine {
                text: "NUMBER \\d+".to_string(),
            },
            Some(Position(2, Arc::new("rules.lex".to_string()))),
        );
        let output = display_error(&error, Some("[rules]\n  NUMBER \\d+\n"));

        assert!(output.starts_with("Error: MalformedLine (Expected"));
        assert!(output.contains("-> rules.lex\n"));
        assert!(output.contains("2 | NUMBER \\d+\n"));
    }

    #[test]
    fn test_display_error_without_position() {
        let error = Error::new(
            ErrorImpl::InvalidPattern {
                rule: "BAD".to_string(),
                cause: "unclosed group".to_string(),
            },
            None,
        );
        let output = display_error(&error, None);

        assert!(output.contains("InvalidPattern"));
        assert!(output.contains("unclosed group"));
        assert!(!output.contains("->"));
    }
}
