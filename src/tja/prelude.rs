//! Convenience re-exports of the decode entry points and the whole document
//! model.

pub use super::{DecodeError, decode, decode_str};

pub use super::alias::{AliasError, AliasSpec, Aliased};
pub use super::model::*;
pub use super::parse::ParseError;
pub use super::value::CoerceError;
