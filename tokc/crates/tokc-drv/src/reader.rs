//! Line-at-a-time input with a fixed capacity.
//!
//! Lines are split on `\n` only, decoded lossily, and cut down to the
//! configured number of characters. The `\n` itself is never part of the
//! returned text; a `\r` before it is kept and scans as whitespace.

use std::io::{self, BufRead};

/// One physical input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number.
    pub number: usize,

    /// Line content without the newline, at most `capacity` characters.
    pub text: String,

    /// Whether content past the capacity was dropped.
    pub truncated: bool,
}

/// Reads [`SourceLine`]s from a buffered reader.
pub struct LineReader<R> {
    inner: R,
    capacity: usize,
    line_number: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    /// Wraps `inner`, keeping at most `capacity` characters per line.
    pub fn new(inner: R, capacity: usize) -> Self {
        Self {
            inner,
            capacity,
            line_number: 0,
            buf: Vec::new(),
        }
    }

    /// Reads the next line, or `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<SourceLine>> {
        self.buf.clear();
        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        self.line_number += 1;

        let decoded = String::from_utf8_lossy(&self.buf);
        let cut = decoded.char_indices().nth(self.capacity).map(|(i, _)| i);
        let (text, truncated) = match cut {
            Some(cut) => (decoded[..cut].to_string(), true),
            None => (decoded.into_owned(), false),
        };

        Ok(Some(SourceLine {
            number: self.line_number,
            text,
            truncated,
        }))
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<SourceLine>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line().transpose()
    }
}
