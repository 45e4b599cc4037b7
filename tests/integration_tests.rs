//! Integration tests for end-to-end scanning.
//!
//! These tests drive the public API the way a front end would: load a rule
//! file, compile it, scan text, and render or inspect the resulting tokens.

use std::path::PathBuf;

use lexer::{
    config::config::{load_config, parse_config, read_source},
    display::{analyze, render_table},
    lexer::{lexer::Lexer, rules::UNRECOGNIZED, scanner::scan},
    MK_RULES,
};

fn rules_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("rules")
        .join(name)
}

#[test]
fn test_scan_with_rule_file() {
    let rules = load_config(&rules_file("arith.lex")).unwrap();
    let compiled = Lexer::from(rules).compiled().unwrap();

    let tokens = scan(&compiled, "area = 3.14 * (r * r)", false);
    let pairs = tokens
        .iter()
        .map(|token| token.as_pair())
        .collect::<Vec<(&str, &str)>>();

    assert_eq!(
        pairs,
        vec![
            ("area", "IDENT"),
            ("=", "OPERATOR"),
            ("3.14", "FLOAT"),
            ("*", "OPERATOR"),
            ("(", "LPAREN"),
            ("r", "IDENT"),
            ("*", "OPERATOR"),
            ("r", "IDENT"),
            (")", "RPAREN"),
        ]
    );
}

#[test]
fn test_rule_file_order() {
    let rules = load_config(&rules_file("arith.lex")).unwrap();
    let compiled = rules.compile().unwrap();

    assert_eq!(
        compiled.rule_names(),
        vec!["FLOAT", "NUMBER", "IDENT", "OPERATOR", "LPAREN", "RPAREN", "WHITESPACE"]
    );
}

#[test]
fn test_broken_rule_file_reports_rule() {
    let rules = load_config(&rules_file("broken.lex")).unwrap();
    let error = rules.compile().unwrap_err();

    assert_eq!(error.get_error_name(), "InvalidPattern");
    assert_eq!(error.get_rule(), Some("GROUP"));
}

#[test]
fn test_missing_rule_file() {
    let error = load_config(&rules_file("does_not_exist.lex")).unwrap_err();
    assert_eq!(error.get_error_name(), "FileError");
}

#[test]
fn test_read_source_matches_load_config() {
    let path = rules_file("does_not_exist.lex");
    let from_read = read_source(&path).unwrap_err();
    let from_load = load_config(&path).unwrap_err();
    assert_eq!(from_read.kind(), from_load.kind());

    let path = rules_file("arith.lex");
    let source = read_source(&path).unwrap();
    let parsed = parse_config(&source, Some(path.display().to_string())).unwrap();
    let loaded = load_config(&path).unwrap();
    assert_eq!(parsed.ordered(), loaded.ordered());
}

#[test]
fn test_unrecognised_characters_reported_in_place() {
    let rules = load_config(&rules_file("arith.lex")).unwrap();
    let compiled = rules.compile().unwrap();

    let input = "x = 1 $ 2 ?";
    let tokens = scan(&compiled, input, true);
    let unrecognised = tokens
        .iter()
        .filter(|token| token.is_unrecognized())
        .map(|token| (token.lexeme.as_str(), token.span.start))
        .collect::<Vec<(&str, usize)>>();

    assert_eq!(unrecognised, vec![("$", 6), ("?", 10)]);
    assert_eq!(
        tokens.iter().map(|token| token.lexeme.as_str()).collect::<String>(),
        input
    );
}

#[test]
fn test_whitespace_toggle_changes_only_whitespace() {
    let mut lexer = Lexer::from(MK_RULES! {
        WORD => r"\w+",
        WHITESPACE => r"\s+",
    });

    let with = lexer.tokenize("hello  big world", true).unwrap();
    let without = lexer.tokenize("hello  big world", false).unwrap();

    let filtered = with
        .into_iter()
        .filter(|token| token.token_type != "WHITESPACE")
        .collect::<Vec<_>>();
    assert_eq!(filtered, without);
}

#[test]
fn test_incremental_rule_updates() {
    let mut lexer = Lexer::new([("NUMBER", r"\d+")]);
    let tokens = lexer.tokenize("1+2", false).unwrap();
    assert_eq!(tokens[1].token_type, UNRECOGNIZED);

    lexer.set_rules([("PLUS", r"\+")]);
    let tokens = lexer.tokenize("1+2", false).unwrap();
    assert_eq!(tokens[1].token_type, "PLUS");
    assert_eq!(tokens.len(), 3);
}

#[test]
fn test_render_scan_output() {
    let rules = parse_config("NUMBER = \\d+\nWHITESPACE = \\s+\n", None).unwrap();
    let compiled = rules.compile().unwrap();

    let table = render_table(&scan(&compiled, "12 34", false));
    assert_eq!(table.lines().count(), 4);
    assert!(table.contains("12      | NUMBER"));

    let report = analyze(&compiled, "12 34", true);
    assert!(report.starts_with("Input: 12 34\n"));
    assert!(report.contains("| WHITESPACE"));
}
