//! Line cursor over the TJA source stream.
//!
//! The grammar never needs lookahead beyond one line, so the cursor offers a
//! single-slot pushback instead of a buffered token stream: callers may peek
//! a structural key and un-consume the line without committing to it.

use std::io::{self, BufRead};

/// A line-at-a-time cursor over a buffered reader.
///
/// Tracks the 1-based count of raw lines consumed and the text of the most
/// recently consumed line, both used for error context by the decoder.
pub struct Cursor<R> {
    reader: R,
    /// Count of raw lines consumed, starts at 0 before any read. The counter
    /// advances on the read that detects end of stream too.
    line_number: usize,
    /// The most recently consumed raw line. `None` before any read and after
    /// end of stream.
    current_line: Option<String>,
    /// Whether the most recent line should be redelivered on the next read.
    pushed_back: bool,
}

impl<R: BufRead> Cursor<R> {
    /// Creates a cursor over `reader`.
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            current_line: None,
            pushed_back: false,
        }
    }

    /// Reads the next raw line, or `None` at end of stream.
    ///
    /// Line terminators (`\n` and `\r\n`) are stripped. A pushed-back line is
    /// redelivered without advancing the line counter.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from the underlying reader.
    pub fn next_raw_line(&mut self) -> io::Result<Option<String>> {
        if self.pushed_back {
            self.pushed_back = false;
            return Ok(self.current_line.clone());
        }
        let mut buf = String::new();
        let read = self.reader.read_line(&mut buf)?;
        self.line_number += 1;
        if read == 0 {
            self.current_line = None;
            return Ok(None);
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        self.current_line = Some(buf);
        Ok(self.current_line.clone())
    }

    /// Reads the next content line, skipping blank lines and lines whose
    /// first non-whitespace characters are `//`.
    ///
    /// Returns the trimmed text, or `None` at end of stream.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from the underlying reader.
    pub fn next_content_line(&mut self) -> io::Result<Option<String>> {
        loop {
            let Some(line) = self.next_raw_line()? else {
                return Ok(None);
            };
            let trimmed = line.trim();
            if !trimmed.is_empty() && !trimmed.starts_with("//") {
                return Ok(Some(trimmed.to_owned()));
            }
        }
    }

    /// Peeks the next content line without consuming it.
    ///
    /// Implemented as read-then-pushback, so the line counter still reflects
    /// the peeked line until it is actually consumed again.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from the underlying reader.
    pub fn peek_content_line(&mut self) -> io::Result<Option<String>> {
        let line = self.next_content_line()?;
        if line.is_some() {
            self.push_back();
        }
        Ok(line)
    }

    /// Marks the most recently read line for redelivery on the next read.
    ///
    /// # Panics
    ///
    /// Panics when called twice without an intervening read, or when no line
    /// has been read yet. Both are programming errors, not input conditions.
    pub fn push_back(&mut self) {
        assert!(
            !self.pushed_back,
            "push_back called twice without an intervening read"
        );
        assert!(self.current_line.is_some(), "no line available to push back");
        self.pushed_back = true;
    }

    /// The 1-based count of raw lines consumed so far.
    pub const fn line_number(&self) -> usize {
        self.line_number
    }

    /// The text of the most recently consumed raw line, if any.
    pub fn current_line(&self) -> Option<&str> {
        self.current_line.as_deref()
    }
}
