//! Lexeme extraction.
//!
//! The scanner pulls one raw lexeme at a time out of a [`Cursor`]:
//!
//! 1. whitespace is skipped;
//! 2. a digit starts a maximal run of digits;
//! 3. `= ! < >` followed by `=` form a two-character operator;
//! 4. anything else is a single character.
//!
//! When only whitespace remains, the lexeme is empty.

use crate::classify::is_two_char_leader;
use crate::cursor::Cursor;

/// Extracts the next raw lexeme, advancing `cursor` past it.
///
/// Returns the empty string once only whitespace is left on the line.
///
/// # Example
///
/// ```
/// use tokc_lex::{next_lexeme, Cursor};
///
/// let mut cursor = Cursor::new("123+4");
/// assert_eq!(next_lexeme(&mut cursor), "123");
/// assert_eq!(next_lexeme(&mut cursor), "+");
/// assert_eq!(next_lexeme(&mut cursor), "4");
/// assert_eq!(next_lexeme(&mut cursor), "");
/// ```
pub fn next_lexeme<'a>(cursor: &mut Cursor<'a>) -> &'a str {
    cursor.skip_whitespace();

    let start = cursor.position();
    if cursor.is_at_end() {
        return cursor.slice_from(start);
    }

    let c = cursor.current_char();
    if c.is_ascii_digit() {
        cursor.eat_digits();
    } else if is_two_char_leader(c) && cursor.peek_next() == '=' {
        cursor.advance_n(2);
    } else {
        cursor.advance();
    }

    cursor.slice_from(start)
}

/// Iterator over the raw lexemes of one line.
///
/// Yields until the cursor reaches the end of the line. A trailing run of
/// whitespace produces one final empty lexeme.
///
/// # Example
///
/// ```
/// use tokc_lex::Scanner;
///
/// let lexemes: Vec<_> = Scanner::new("a <= 10 ").collect();
/// assert_eq!(lexemes, ["a", "<=", "10", ""]);
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over `line`, which must not contain its newline.
    pub fn new(line: &'a str) -> Self {
        Self {
            cursor: Cursor::new(line),
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.is_at_end() {
            return None;
        }
        Some(next_lexeme(&mut self.cursor))
    }
}
