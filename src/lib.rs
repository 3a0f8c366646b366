//! tja-rs is the TJA chart file format decoder.
//!
//! TJA (.tja) is a line-oriented, human-authored text format for rhythm game
//! charts. A file consists of global song metadata followed by one or more
//! per-difficulty course sections. This crate decodes such a file into an
//! immutable, strongly-typed [`tja::model::TjaFile`] document.
//!
//! # Example
//!
//! ```
//! use tja_rs::tja::{decode_str, model::Difficulty};
//!
//! let file = decode_str("TITLE:Example\nBPM:240\nCOURSE:Oni\nLEVEL:8\n").expect("must be decoded");
//! assert_eq!(file.metadata.bpm, Some(240.0));
//! assert_eq!(file.courses[0].difficulty, Some(Difficulty::Oni));
//! assert_eq!(file.courses[0].stars, Some(8));
//! ```

pub mod tja;

pub use tja::{DecodeError, decode, decode_str};
