//! Lexeme classification.
//!
//! Classification dispatches on the first character and only looks at the
//! second one for the `= ! < >` leaders. The checks run in a fixed order:
//! single-character punctuation is resolved before the two-character table,
//! so `;` or `+` can never be read as the head of a `?=` operator.

use crate::token::TokenCategory;

/// Maps a raw lexeme to its category.
///
/// Total over all strings: the empty string is [`TokenCategory::Empty`] and
/// anything unrecognized is [`TokenCategory::Error`].
///
/// # Example
///
/// ```
/// use tokc_lex::{classify, TokenCategory};
///
/// assert_eq!(classify("123"), TokenCategory::IntLiteral);
/// assert_eq!(classify("!="), TokenCategory::NotEqual);
/// assert_eq!(classify("x"), TokenCategory::Error);
/// assert_eq!(classify(""), TokenCategory::Empty);
/// ```
pub fn classify(raw: &str) -> TokenCategory {
    let mut chars = raw.chars();
    let Some(first) = chars.next() else {
        return TokenCategory::Empty;
    };

    if first.is_ascii_digit() {
        return TokenCategory::IntLiteral;
    }

    if let Some(category) = single_char_category(first) {
        return category;
    }

    if let (Some('='), None) = (chars.next(), chars.next()) {
        if let Some(category) = two_char_category(first) {
            return category;
        }
    }

    comparison_leader_category(first).unwrap_or(TokenCategory::Error)
}

/// Operators and punctuation that never combine with a following `=`.
fn single_char_category(c: char) -> Option<TokenCategory> {
    let category = match c {
        '+' => TokenCategory::Add,
        '-' => TokenCategory::Sub,
        '*' => TokenCategory::Mult,
        '/' => TokenCategory::Div,
        '(' => TokenCategory::LeftParen,
        ')' => TokenCategory::RightParen,
        '^' => TokenCategory::Expon,
        ';' => TokenCategory::Semicolon,
        _ => return None,
    };
    Some(category)
}

/// Category of `<lead>=`.
fn two_char_category(lead: char) -> Option<TokenCategory> {
    let category = match lead {
        '<' => TokenCategory::LessEqual,
        '>' => TokenCategory::GreaterEqual,
        '=' => TokenCategory::Equal,
        '!' => TokenCategory::NotEqual,
        _ => return None,
    };
    Some(category)
}

/// Category of a lone `= ! < >`.
fn comparison_leader_category(c: char) -> Option<TokenCategory> {
    let category = match c {
        '=' => TokenCategory::Assign,
        '!' => TokenCategory::Not,
        '<' => TokenCategory::Less,
        '>' => TokenCategory::Greater,
        _ => return None,
    };
    Some(category)
}

/// Returns true if `c` starts a two-character operator when followed by `=`.
pub fn is_two_char_leader(c: char) -> bool {
    two_char_category(c).is_some()
}
