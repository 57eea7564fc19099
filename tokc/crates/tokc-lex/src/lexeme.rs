//! Bounded lexeme storage.
//!
//! A lexeme holds at most [`MAX_LEXEME_LEN`] characters. Raw text longer
//! than that is either rejected by [`Lexeme::new`] or cut down by
//! [`Lexeme::truncated`]; it is never stored past the bound.

use std::fmt;

use thiserror::Error;

/// Maximum number of characters a stored lexeme may hold.
pub const MAX_LEXEME_LEN: usize = 19;

/// Raw text did not fit in a [`Lexeme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("lexeme of {len} characters exceeds the limit of {max}")]
pub struct LexemeOverflow {
    /// Length of the rejected text, in characters.
    pub len: usize,
    /// The bound that was exceeded.
    pub max: usize,
}

/// What to do with a lexeme longer than [`MAX_LEXEME_LEN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum OverflowPolicy {
    /// Keep the leading characters and classify them.
    #[default]
    Truncate,
    /// Report the lexeme as a lexical error.
    Reject,
}

/// A bounded-length lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Lexeme(String);

impl Lexeme {
    /// Stores `raw` if it fits within the bound.
    ///
    /// # Example
    ///
    /// ```
    /// use tokc_lex::Lexeme;
    ///
    /// assert!(Lexeme::new("12345").is_ok());
    /// assert!(Lexeme::new(&"1".repeat(20)).is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, LexemeOverflow> {
        let len = raw.chars().count();
        if len > MAX_LEXEME_LEN {
            return Err(LexemeOverflow {
                len,
                max: MAX_LEXEME_LEN,
            });
        }
        Ok(Self(raw.to_string()))
    }

    /// Stores the first [`MAX_LEXEME_LEN`] characters of `raw`.
    pub fn truncated(raw: &str) -> Self {
        Self(raw.chars().take(MAX_LEXEME_LEN).collect())
    }

    /// Returns the stored text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns true for the empty lexeme.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Lexeme {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
