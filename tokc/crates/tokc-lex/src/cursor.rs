//! Character cursor over a single source line.
//!
//! This module provides the `Cursor` struct which holds the scan position
//! within one line of input. The end of the borrowed slice acts as the
//! line's sentinel: the cursor never moves past it, and reading at the end
//! yields `'\0'`.

/// A cursor for traversing one line of source text character by character.
///
/// The cursor only moves forward. It handles UTF-8 encoded text, so a
/// non-ASCII character is consumed as a single unit.
///
/// # Example
///
/// ```
/// use tokc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("12+3;");
///
/// assert_eq!(cursor.current_char(), '1');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), '2');
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    /// The line being scanned, without its trailing newline.
    line: &'a str,

    /// Current byte position in the line.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the start of `line`.
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            position: 0,
        }
    }

    /// Returns the character at the cursor position.
    ///
    /// Returns '\0' if at the end of the line.
    ///
    /// # Example
    ///
    /// ```
    /// use tokc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("<=");
    /// assert_eq!(cursor.current_char(), '<');
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        self.char_at(0)
    }

    /// Returns the character at the given byte offset from the current
    /// position, or '\0' past the end of the line.
    #[inline]
    pub fn char_at(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.line.len() {
            return '\0';
        }

        // Fast path for ASCII
        let b = self.line.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        self.line
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('\0')
    }

    /// Returns the character following the current one.
    ///
    /// # Example
    ///
    /// ```
    /// use tokc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("!=");
    /// assert_eq!(cursor.peek_next(), '=');
    /// assert_eq!(Cursor::new("!").peek_next(), '\0');
    /// ```
    #[inline]
    pub fn peek_next(&self) -> char {
        self.char_at(self.current_char().len_utf8())
    }

    /// Advances the cursor past the current character.
    ///
    /// Does nothing if already at the end of the line.
    #[inline]
    pub fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }

        let b = self.line.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
        } else if let Some(c) = self.line[self.position..].chars().next() {
            self.position += c.len_utf8();
        }
    }

    /// Advances the cursor by up to `count` characters, stopping at the end
    /// of the line.
    ///
    /// # Example
    ///
    /// ```
    /// use tokc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123+4");
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.current_char(), '+');
    /// cursor.advance_n(10);
    /// assert!(cursor.is_at_end());
    /// ```
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Advances past consecutive ASCII digits.
    pub fn eat_digits(&mut self) {
        while self.current_char().is_ascii_digit() {
            self.advance();
        }
    }

    /// Skips the whitespace accepted by [`is_space`], returning how many
    /// characters were skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use tokc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(" \t 7");
    /// assert_eq!(cursor.skip_whitespace(), 3);
    /// assert_eq!(cursor.current_char(), '7');
    /// ```
    pub fn skip_whitespace(&mut self) -> usize {
        let mut skipped = 0;
        while !self.is_at_end() && is_space(self.current_char()) {
            self.advance();
            skipped += 1;
        }
        skipped
    }

    /// Returns true if the cursor has reached the end of the line.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.line.len()
    }

    /// Returns the current byte position in the line.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the slice of the line between `start` and the current
    /// position.
    ///
    /// # Example
    ///
    /// ```
    /// use tokc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("42;");
    /// let start = cursor.position();
    /// cursor.eat_digits();
    /// assert_eq!(cursor.slice_from(start), "42");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.line[start..self.position]
    }

    /// Returns the unscanned remainder of the line.
    pub fn remaining(&self) -> &'a str {
        &self.line[self.position..]
    }
}

/// Returns true for the ASCII whitespace set: space, `\t`, `\n`, `\v`,
/// `\f` and `\r`.
///
/// Other Unicode spaces are not separators and scan as lexemes.
///
/// # Example
///
/// ```
/// use tokc_lex::cursor::is_space;
///
/// assert!(is_space('\x0B'));
/// assert!(!is_space('\u{A0}'));
/// ```
#[inline]
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}
