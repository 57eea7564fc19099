//! Token categories and classified tokens.

use std::fmt;

use crate::classify::classify;
use crate::lexeme::{Lexeme, OverflowPolicy};

/// Lexical class assigned to a scanned lexeme.
///
/// The set is closed: every lexeme maps to exactly one category, with
/// [`TokenCategory::Error`] catching anything outside the grammar and
/// [`TokenCategory::Empty`] marking a whitespace-only tail of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    /// A run of decimal digits: `42`
    IntLiteral,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mult,
    /// `/`
    Div,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `^`
    Expon,
    /// `=`
    Assign,
    /// `!`
    Not,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `;`
    Semicolon,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// Nothing left on the line after whitespace.
    Empty,
    /// Not a lexeme of the language.
    Error,
}

impl TokenCategory {
    /// Every category, in declaration order.
    pub const ALL: [TokenCategory; 19] = [
        Self::IntLiteral,
        Self::Add,
        Self::Sub,
        Self::Mult,
        Self::Div,
        Self::LeftParen,
        Self::RightParen,
        Self::Expon,
        Self::Assign,
        Self::Not,
        Self::Less,
        Self::Greater,
        Self::Semicolon,
        Self::LessEqual,
        Self::GreaterEqual,
        Self::Equal,
        Self::NotEqual,
        Self::Empty,
        Self::Error,
    ];

    /// Returns the report label for this category, e.g. `INT_LITERAL`.
    pub fn label(self) -> &'static str {
        match self {
            Self::IntLiteral => "INT_LITERAL",
            Self::Add => "ADD_OP",
            Self::Sub => "SUB_OP",
            Self::Mult => "MULT_OP",
            Self::Div => "DIV_OP",
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::Expon => "EXPON_OP",
            Self::Assign => "ASSIGN_OP",
            Self::Not => "NOT_OP",
            Self::Less => "LESS_THAN_OP",
            Self::Greater => "GREAT_THAN_OP",
            Self::Semicolon => "SEMI_COLON",
            Self::LessEqual => "LESS_THAN_OR_EQUAL_OP",
            Self::GreaterEqual => "GREATER_THAN_OR_EQUAL_OP",
            Self::Equal => "EQUAL_OP",
            Self::NotEqual => "NOT_EQUALS_OP",
            Self::Empty => "EMPTY",
            Self::Error => "ERROR",
        }
    }

    /// Returns the indefinite article that reads naturally before the label.
    pub fn article(self) -> &'static str {
        match self {
            Self::IntLiteral
            | Self::Add
            | Self::Expon
            | Self::Assign
            | Self::Equal
            | Self::Empty
            | Self::Error => "an",
            _ => "a",
        }
    }

    /// Returns true for categories that produce a classification line.
    pub fn is_reportable(self) -> bool {
        !matches!(self, Self::Empty | Self::Error)
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.article(), self.label())
    }
}

/// A lexeme paired with its category.
///
/// Tokens are built fresh for every scan step and handed straight to a
/// reporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The bounded raw text.
    pub lexeme: Lexeme,

    /// The lexical class of `lexeme`.
    pub category: TokenCategory,

    /// Whether the raw text exceeded the lexeme bound.
    pub overflowed: bool,
}

impl Token {
    /// Classifies a raw lexeme, applying `policy` when it exceeds the
    /// lexeme bound.
    ///
    /// # Example
    ///
    /// ```
    /// use tokc_lex::{OverflowPolicy, Token, TokenCategory};
    ///
    /// let token = Token::from_raw("<=", OverflowPolicy::Truncate);
    /// assert_eq!(token.category, TokenCategory::LessEqual);
    /// assert_eq!(token.lexeme.as_str(), "<=");
    /// ```
    pub fn from_raw(raw: &str, policy: OverflowPolicy) -> Self {
        match Lexeme::new(raw) {
            Ok(lexeme) => Self {
                category: classify(lexeme.as_str()),
                lexeme,
                overflowed: false,
            },
            Err(_) => {
                let lexeme = Lexeme::truncated(raw);
                let category = match policy {
                    OverflowPolicy::Truncate => classify(lexeme.as_str()),
                    OverflowPolicy::Reject => TokenCategory::Error,
                };
                Self {
                    lexeme,
                    category,
                    overflowed: true,
                }
            }
        }
    }

    /// Returns the raw text of the token.
    pub fn as_str(&self) -> &str {
        self.lexeme.as_str()
    }
}
