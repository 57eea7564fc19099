//! Edge case tests for tokc-lex

use crate::cursor::is_space;
use crate::{
    classify, next_lexeme, tokenize_line, Cursor, OverflowPolicy, Scanner, StatementState, Token,
    TokenCategory, MAX_LEXEME_LEN,
};

fn lex_all(line: &str) -> Vec<(String, TokenCategory)> {
    tokenize_line(line, OverflowPolicy::Truncate)
        .map(|t| (t.as_str().to_string(), t.category))
        .collect()
}

// ==================== SCANNER ====================

#[test]
fn test_edge_single_digit() {
    assert_eq!(lex_all("0"), [("0".to_string(), TokenCategory::IntLiteral)]);
}

#[test]
fn test_edge_leading_zeros_kept() {
    assert_eq!(lex_all("007")[0].0, "007");
}

#[test]
fn test_edge_lone_leader_at_end_of_line() {
    for line in ["<", ">", "=", "!"] {
        let mut cursor = Cursor::new(line);
        assert_eq!(next_lexeme(&mut cursor), line);
        assert!(cursor.is_at_end());
    }
}

#[test]
fn test_edge_triple_equals() {
    let tokens = lex_all("===");
    assert_eq!(tokens[0], ("==".to_string(), TokenCategory::Equal));
    assert_eq!(tokens[1], ("=".to_string(), TokenCategory::Assign));
}

#[test]
fn test_edge_leader_then_space_then_equals() {
    let tokens = lex_all("< =");
    assert_eq!(tokens[0].1, TokenCategory::Less);
    assert_eq!(tokens[1].1, TokenCategory::Assign);
}

#[test]
fn test_edge_no_sign_or_decimal_in_literal() {
    assert_eq!(
        lex_all("-3.5"),
        [
            ("-".to_string(), TokenCategory::Sub),
            ("3".to_string(), TokenCategory::IntLiteral),
            (".".to_string(), TokenCategory::Error),
            ("5".to_string(), TokenCategory::IntLiteral),
        ]
    );
}

#[test]
fn test_edge_identifier_characters_are_errors() {
    let tokens = lex_all("ab=1;");
    assert_eq!(tokens[0].1, TokenCategory::Error);
    assert_eq!(tokens[1].1, TokenCategory::Error);
    assert_eq!(tokens[2].1, TokenCategory::Assign);
}

#[test]
fn test_edge_interior_nul_is_error() {
    let tokens = lex_all("1\u{0}2");
    assert_eq!(tokens[1], ("\u{0}".to_string(), TokenCategory::Error));
    assert_eq!(tokens[2].1, TokenCategory::IntLiteral);
}

#[test]
fn test_edge_long_digit_run() {
    let digits = "1".repeat(MAX_LEXEME_LEN * 2);
    let tokens: Vec<Token> = tokenize_line(&digits, OverflowPolicy::Truncate).collect();
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].overflowed);
    assert_eq!(tokens[0].lexeme.len(), MAX_LEXEME_LEN);
}

#[test]
fn test_edge_scanner_consumes_whole_line() {
    let line = " 1 + ( 22 <= 3 ) ; ";
    let consumed: usize = Scanner::new(line).map(|raw| raw.chars().count()).sum();
    let whitespace = line.chars().filter(|&c| is_space(c)).count();
    assert_eq!(consumed, line.chars().count() - whitespace);
}

// ==================== CLASSIFIER ====================

#[test]
fn test_edge_semicolon_never_two_char() {
    assert_eq!(classify(";"), TokenCategory::Semicolon);
    assert_eq!(classify(";="), TokenCategory::Semicolon);
}

#[test]
fn test_edge_every_ascii_char_classifies() {
    for b in 0u8..128 {
        let raw = (b as char).to_string();
        let category = classify(&raw);
        if b.is_ascii_digit() {
            assert_eq!(category, TokenCategory::IntLiteral);
        } else if b"+-*/()^;=!<>".contains(&b) {
            assert!(category.is_reportable(), "{raw:?}");
        } else {
            assert_eq!(category, TokenCategory::Error, "{raw:?}");
        }
    }
}

// ==================== STATEMENTS ====================

#[test]
fn test_edge_semicolon_only_statements() {
    let mut state = StatementState::new();
    let mut opened = 0;
    for token in tokenize_line(";;;", OverflowPolicy::Truncate) {
        let (next, obs) = state.observe(token.category);
        state = next;
        assert_eq!(obs.token_index, 1);
        opened += usize::from(obs.opens_statement);
    }
    assert_eq!(opened, 3);
}

#[test]
fn test_edge_error_token_does_not_close_statement() {
    let mut state = StatementState::new();
    for token in tokenize_line("1 x 2", OverflowPolicy::Truncate) {
        state = state.observe(token.category).0;
    }
    assert!(!state.at_statement_start());
    assert_eq!(state.token_index(), 3);
}
