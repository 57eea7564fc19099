//! tokc-lex - Scanner and classifier for the tokc statement language
//!
//! This crate turns lines of a small arithmetic/assignment language into
//! classified tokens grouped into `;`-terminated statements.
//!
//! # Example Usage
//!
//! ```
//! use tokc_lex::{tokenize_line, OverflowPolicy, StatementState, TokenCategory};
//!
//! let mut state = StatementState::new();
//! for token in tokenize_line("12+3;", OverflowPolicy::Truncate) {
//!     let (next, observation) = state.observe(token.category);
//!     state = next;
//!     println!("{} {} {}", observation.token_index, token.as_str(), token.category);
//! }
//! assert!(state.at_statement_start());
//! ```
//!
//! # Module Structure
//!
//! - [`cursor`] - Position within one source line
//! - [`scanner`] - Raw lexeme extraction
//! - [`classify`] - Lexeme to category mapping
//! - [`statement`] - Statement boundary tracking
//! - [`token`] - Token categories and tokens
//! - [`lexeme`] - Bounded lexeme storage
//!
//! # Grammar
//!
//! - **Integer literals**: maximal runs of decimal digits, `0`, `0042`
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `^`
//! - **Grouping**: `(`, `)`
//! - **Assignment and logic**: `=`, `!`
//! - **Comparison**: `<`, `>`, `<=`, `>=`, `==`, `!=`
//! - **Terminator**: `;`
//!
//! Any other character is a lexical error. Whitespace separates lexemes and
//! is otherwise ignored.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod lexeme;
pub mod scanner;
pub mod statement;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use classify::classify;
pub use cursor::Cursor;
pub use lexeme::{Lexeme, LexemeOverflow, OverflowPolicy, MAX_LEXEME_LEN};
pub use scanner::{next_lexeme, Scanner};
pub use statement::{Observation, StatementState};
pub use token::{Token, TokenCategory};

/// Scans and classifies every lexeme of `line`.
pub fn tokenize_line(line: &str, policy: OverflowPolicy) -> impl Iterator<Item = Token> + '_ {
    Scanner::new(line).map(move |raw| Token::from_raw(raw, policy))
}
