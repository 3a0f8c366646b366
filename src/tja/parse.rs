//! Two-phase parser assembling a [`TjaFile`] from cursor lines.
//!
//! Phase one reads global metadata key-value pairs until the `COURSE`
//! sentinel, phase two reads one course section per `COURSE` header until
//! the input ends. The sentinel line is pushed back between phases and
//! between courses so each course reader starts at its own header.

mod builders;

use std::io::BufRead;

use thiserror::Error;

use self::builders::{CourseBuilder, TjaFileBuilder};
use super::alias::AliasError;
use super::cursor::Cursor;
use super::model::{Course, TjaFile};
use super::value::{self, CoerceError};

/// A fault raised while processing the document.
///
/// The top-level decode wraps every variant with the current line number and
/// raw line text, see [`crate::tja::DecodeError`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ParseError {
    /// A significant line has no `:` separator.
    #[error("expected key-value pair, but line is missing a colon separator")]
    MissingColon,
    /// A course section opened with something other than a `COURSE` pair.
    #[error("expected `COURSE` at the start of a course section, but got `{key}:{value}`")]
    UnexpectedCourseKey {
        /// The key that was found instead.
        key: String,
        /// Its raw value.
        value: String,
    },
    /// A key has no field slot in the structure being populated.
    #[error("key `{key}` does not match any field of `{target}`")]
    UnknownKey {
        /// The structure the key was routed to.
        target: &'static str,
        /// The unrecognized key.
        key: String,
    },
    /// A field slot already holds a value.
    #[error("attempted to set key `{key}` to `{new}`, but it was already set to `{old}`")]
    DuplicateKey {
        /// The re-assigned key.
        key: String,
        /// The previously stored value, rendered.
        old: String,
        /// The rejected new raw value.
        new: String,
    },
    /// A raw value failed to coerce into its field's shape.
    #[error("invalid value for key `{key}`, expected {shape}")]
    InvalidValue {
        /// The key whose value was rejected.
        key: String,
        /// The shape the field declares.
        shape: &'static str,
        /// The underlying coercion fault.
        #[source]
        cause: CoerceError,
    },
    /// An enum token failed to resolve outside of field coercion.
    #[error(transparent)]
    Alias(#[from] AliasError),
    /// The input ended while a required pair was still expected.
    #[error("encountered end of stream when parsing {context}")]
    UnexpectedEof {
        /// What was being parsed when the stream ended.
        context: &'static str,
    },
    /// The underlying reader failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// type alias of `core::result::Result<T, ParseError>`
pub(crate) type Result<T> = core::result::Result<T, ParseError>;

/// Splits a content line on its first `:` into a trimmed key and raw value.
fn split_key_value(line: &str) -> Result<(&str, &str)> {
    let (key, value) = line.split_once(':').ok_or(ParseError::MissingColon)?;
    Ok((key.trim(), value.trim()))
}

/// Runs the full metadata-then-courses state machine over `cursor`.
pub(crate) fn parse<R: BufRead>(cursor: &mut Cursor<R>) -> Result<TjaFile> {
    let mut file = TjaFileBuilder::default();

    // ReadingMetadata: route pairs into the metadata builder until the
    // COURSE sentinel shows up, then hand the line back unconsumed.
    loop {
        let Some(line) = cursor.next_content_line()? else {
            return Err(ParseError::UnexpectedEof { context: "metadata" });
        };
        let (key, raw) = split_key_value(&line)?;
        if key == "COURSE" {
            cursor.push_back();
            break;
        }
        file.metadata.set(key, raw)?;
    }

    loop {
        file.courses.push(parse_course(cursor)?);
        if cursor.peek_content_line()?.is_none() {
            break;
        }
    }

    Ok(file.finish())
}

/// Reads one course section, from its `COURSE` header to the next header or
/// the end of input.
fn parse_course<R: BufRead>(cursor: &mut Cursor<R>) -> Result<Course> {
    // ReadingCourseHeader: the leading pair of a section must be COURSE.
    let Some(line) = cursor.next_content_line()? else {
        return Err(ParseError::UnexpectedEof { context: "a course header" });
    };
    let (key, raw) = split_key_value(&line)?;
    if key != "COURSE" {
        return Err(ParseError::UnexpectedCourseKey {
            key: key.to_owned(),
            value: raw.to_owned(),
        });
    }
    let difficulty = value::coerce_enum(raw).map_err(|cause| ParseError::InvalidValue {
        key: "COURSE".to_owned(),
        shape: "a `Difficulty` token",
        cause,
    })?;
    let mut course = CourseBuilder::new(difficulty);

    // ReadingCourseBody: tuning keys, style switches and command blocks
    // until the next COURSE sentinel. Running out of input here just ends
    // the course.
    while let Some(line) = cursor.next_content_line()? {
        if line.starts_with('#') {
            read_command_block(cursor, &mut course, line)?;
            continue;
        }
        let (key, raw) = split_key_value(&line)?;
        match key {
            "COURSE" => {
                cursor.push_back();
                break;
            }
            "LEVEL" => course.set_stars(raw)?,
            "STYLE" => course.set_active_style(raw)?,
            // Per-difficulty chart designer credits. The document has no
            // field for them, they are recognized and discarded.
            "NOTESDESIGNER0" | "NOTESDESIGNER1" | "NOTESDESIGNER2" => {}
            _ => course.active_variant_mut().set(key, raw)?,
        }
    }

    Ok(course.finish())
}

/// Consumes an opaque command block, from its opening `#` line up to and
/// including the `#END` marker, appending the raw lines to the active
/// variant. A `#START P2` opener routes the block to the player-2 list.
fn read_command_block<R: BufRead>(
    cursor: &mut Cursor<R>,
    course: &mut CourseBuilder,
    opening: String,
) -> Result<()> {
    let player2 = opening
        .strip_prefix("#START")
        .is_some_and(|arg| arg.trim() == "P2");
    let variant = course.active_variant_mut();
    variant.push_command_line(player2, opening);
    // Interior content is out of scope, nothing is validated here. An
    // unterminated block simply ends with the input.
    while let Some(line) = cursor.next_raw_line()? {
        let done = line.trim() == "#END";
        variant.push_command_line(player2, line);
        if done {
            break;
        }
    }
    Ok(())
}
