//! Statement boundary tracking.
//!
//! A statement opens at the first lexeme of the stream and at the first
//! lexeme after every `;`. The state is a plain `Copy` value threaded
//! through [`StatementState::observe`], so it spans lines without any
//! bookkeeping in the read loop.

use crate::token::TokenCategory;

/// Running statement and token counters for one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementState {
    statement_index: usize,
    token_index: usize,
    at_statement_start: bool,
}

/// Where an observed token landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    /// 1-based index of the statement the token belongs to.
    pub statement_index: usize,

    /// 1-based index of the token within its statement.
    pub token_index: usize,

    /// Whether this token opened a new statement.
    pub opens_statement: bool,
}

impl StatementState {
    /// Creates the state for a fresh scan, positioned before the first
    /// statement.
    pub fn new() -> Self {
        Self {
            statement_index: 0,
            token_index: 0,
            at_statement_start: true,
        }
    }

    /// Accounts for one scanned token and returns the updated state.
    ///
    /// Every scanned lexeme is observed, including empty and erroneous ones,
    /// so they consume a token index even though they are not reported as
    /// classifications.
    ///
    /// # Example
    ///
    /// ```
    /// use tokc_lex::{StatementState, TokenCategory};
    ///
    /// let state = StatementState::new();
    /// let (state, first) = state.observe(TokenCategory::IntLiteral);
    /// assert!(first.opens_statement);
    /// let (state, semi) = state.observe(TokenCategory::Semicolon);
    /// assert_eq!((semi.statement_index, semi.token_index), (1, 2));
    /// let (_, next) = state.observe(TokenCategory::IntLiteral);
    /// assert_eq!((next.statement_index, next.token_index), (2, 1));
    /// ```
    #[must_use]
    pub fn observe(self, category: TokenCategory) -> (Self, Observation) {
        let mut next = self;
        let opens_statement = next.at_statement_start;
        if opens_statement {
            next.statement_index += 1;
            next.token_index = 0;
        }
        next.token_index += 1;
        next.at_statement_start = category == TokenCategory::Semicolon;

        let observation = Observation {
            statement_index: next.statement_index,
            token_index: next.token_index,
            opens_statement,
        };
        (next, observation)
    }

    /// Number of statements opened so far.
    pub fn statement_index(&self) -> usize {
        self.statement_index
    }

    /// Tokens observed in the current statement.
    pub fn token_index(&self) -> usize {
        self.token_index
    }

    /// Whether the next observed token opens a statement.
    pub fn at_statement_start(&self) -> bool {
        self.at_statement_start
    }
}

impl Default for StatementState {
    fn default() -> Self {
        Self::new()
    }
}
