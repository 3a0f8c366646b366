//! The decoder module of TJA (.tja) chart files.
//!
//! Raw text == [`cursor`] ==> content lines == [`parse`] ==> [`model::TjaFile`]
//!
//! `cursor` wraps the input stream and yields one logical line at a time,
//! skipping blank lines and `//` comments while tracking the line number for
//! diagnostics.
//!
//! `parse` runs a two-phase state machine over those lines: global metadata
//! until the `COURSE` sentinel, then one course section per `COURSE` header.
//! Field values are coerced by [`value`] and enum tokens are resolved through
//! the alias tables in [`alias`].
//!
//! In detail, our policies are:
//!
//! - Support only UTF-8 input.
//! - Do not support editing or re-encoding TJA source text.
//! - Treat the interior of `#START`..`#END` command blocks as opaque lines.
//! - Decoding is all-or-nothing: any fault aborts with line-level context and
//!   no partial document is returned.

pub mod alias;
pub mod cursor;
pub mod model;
pub mod parse;
pub mod prelude;
pub mod value;

use std::io::BufRead;

use thiserror::Error;

use self::{cursor::Cursor, model::TjaFile, parse::ParseError};

/// An error occurred while decoding a TJA document.
///
/// Carries the 1-based number and raw text of the line that was being
/// processed when decoding failed. The underlying fault is available through
/// [`std::error::Error::source`].
#[derive(Debug, Error)]
#[error("encountered error while decoding at line {line_number}, current line {line:?}")]
pub struct DecodeError {
    /// 1-based count of raw lines consumed when the failure occurred.
    pub line_number: usize,
    /// Raw text of the most recently consumed line, empty at end of stream.
    pub line: String,
    /// The fault that aborted decoding.
    #[source]
    pub cause: ParseError,
}

/// Decodes a TJA document from a buffered reader.
///
/// Either returns a complete [`TjaFile`] or fails with a [`DecodeError`]
/// naming the line being processed; nothing is retried and no partial
/// document is produced.
///
/// # Errors
///
/// Returns a [`DecodeError`] when the input violates the format or the
/// underlying reader fails.
pub fn decode<R: BufRead>(reader: R) -> Result<TjaFile, DecodeError> {
    let mut cursor = Cursor::new(reader);
    parse::parse(&mut cursor).map_err(|cause| DecodeError {
        line_number: cursor.line_number(),
        line: cursor.current_line().unwrap_or_default().to_owned(),
        cause,
    })
}

/// Decodes a TJA document from an in-memory string.
///
/// Wraps the string in an in-memory reader and delegates to [`decode`].
///
/// # Errors
///
/// Returns a [`DecodeError`] when the input violates the format.
pub fn decode_str(source: &str) -> Result<TjaFile, DecodeError> {
    decode(source.as_bytes())
}
