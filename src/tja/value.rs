//! Coercion from raw TJA field values into typed ones.
//!
//! Every function here is pure: it takes the trimmed raw value of one
//! `KEY:VALUE` line and produces a typed value or a [`CoerceError`] naming
//! the raw input. Which coercion applies to which key is decided by the
//! field dispatch in [`crate::tja::parse`].

use std::path::PathBuf;

use thiserror::Error;

use super::alias::{self, AliasError, Aliased};
use super::model::{DojoGauge, TaikoWebSkin};

/// An error occurred when coercing a raw value.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum CoerceError {
    /// The value is not a valid boolean token.
    #[error("`{raw}` is not a valid boolean, expected `0` or `1`")]
    InvalidBoolean {
        /// The rejected raw value.
        raw: String,
    },
    /// The value is not a valid integer.
    #[error("`{raw}` is not a valid integer")]
    InvalidInteger {
        /// The rejected raw value.
        raw: String,
    },
    /// The value is not a valid number.
    #[error("`{raw}` is not a valid number")]
    InvalidNumber {
        /// The rejected raw value.
        raw: String,
    },
    /// A skin descriptor segment is not of the `attribute value` form.
    #[error("`{segment}` is not a valid skin descriptor segment, expected `attribute value`")]
    InvalidSkinSegment {
        /// The rejected segment.
        segment: String,
    },
    /// A skin descriptor names an attribute this decoder does not know.
    #[error("unknown skin descriptor attribute `{attribute}`")]
    UnknownSkinAttribute {
        /// The unrecognized attribute.
        attribute: String,
    },
    /// A skin descriptor lacks one of its required attributes.
    #[error("skin descriptor is missing required attribute `{attribute}`")]
    MissingSkinAttribute {
        /// The absent attribute.
        attribute: &'static str,
    },
    /// An integer tuple has neither 1 nor 2 elements.
    #[error("expected 1 or 2 comma-separated integers, got {count}")]
    InvalidTupleArity {
        /// How many elements the value had.
        count: usize,
    },
    /// An exam descriptor does not have exactly 4 fields.
    #[error("expected 4 comma-separated exam fields `condition,red,gold,scope`, got {count}")]
    InvalidExamArity {
        /// How many fields the value had.
        count: usize,
    },
    /// An enum token failed to resolve.
    #[error(transparent)]
    Alias(#[from] AliasError),
}

/// type alias of `core::result::Result<T, CoerceError>`
pub(crate) type Result<T> = core::result::Result<T, CoerceError>;

/// Coerces a raw value verbatim into an owned string.
pub fn coerce_string(raw: &str) -> Result<String> {
    Ok(raw.to_owned())
}

/// Coerces `0` into `false` and `1` into `true`.
///
/// # Errors
///
/// Any other token is a [`CoerceError::InvalidBoolean`].
pub fn coerce_bool(raw: &str) -> Result<bool> {
    match raw {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(CoerceError::InvalidBoolean { raw: raw.to_owned() }),
    }
}

/// Coerces a culture-invariant integer.
///
/// # Errors
///
/// Returns [`CoerceError::InvalidInteger`] on parse failure.
pub fn coerce_int(raw: &str) -> Result<i32> {
    raw.parse()
        .map_err(|_| CoerceError::InvalidInteger { raw: raw.to_owned() })
}

/// Coerces a culture-invariant floating-point number.
///
/// # Errors
///
/// Returns [`CoerceError::InvalidNumber`] on parse failure.
pub fn coerce_number(raw: &str) -> Result<f64> {
    raw.parse()
        .map_err(|_| CoerceError::InvalidNumber { raw: raw.to_owned() })
}

/// Wraps a raw value as a file or directory reference. No existence check is
/// made, the path is stored as written.
pub fn coerce_path(raw: &str) -> Result<PathBuf> {
    Ok(PathBuf::from(raw))
}

/// Resolves a raw value as an enum token through the alias registry.
///
/// # Errors
///
/// Returns [`CoerceError::Alias`] for unknown tokens.
pub fn coerce_enum<T: Aliased>(raw: &str) -> Result<T> {
    Ok(alias::resolve(raw)?)
}

/// Coerces a comma-separated integer list, tolerating one trailing comma.
///
/// # Errors
///
/// Returns [`CoerceError::InvalidInteger`] when any element fails to parse.
pub fn coerce_int_list(raw: &str) -> Result<Vec<i32>> {
    let raw = raw.strip_suffix(',').unwrap_or(raw);
    raw.split(',').map(|part| coerce_int(part.trim())).collect()
}

/// Coerces a 1-or-2 element integer tuple such as a `SCOREINIT` value.
///
/// # Errors
///
/// Returns [`CoerceError::InvalidTupleArity`] for any other element count,
/// and [`CoerceError::InvalidInteger`] when an element fails to parse.
pub fn coerce_int_pair(raw: &str) -> Result<(i32, Option<i32>)> {
    let parts: Vec<_> = raw.split(',').collect();
    match parts.as_slice() {
        [first] => Ok((coerce_int(first.trim())?, None)),
        [first, second] => Ok((coerce_int(first.trim())?, Some(coerce_int(second.trim())?))),
        _ => Err(CoerceError::InvalidTupleArity { count: parts.len() }),
    }
}

/// Coerces a taiko-web skin descriptor.
///
/// The value is a comma-separated list of `attribute value` segments split on
/// the first space. `dir` and `name` are required; `song`, `stage` and `don`
/// are optional.
///
/// # Errors
///
/// Returns a [`CoerceError`] for malformed segments, unknown attributes, or
/// missing required attributes.
pub fn coerce_skin(raw: &str) -> Result<TaikoWebSkin> {
    let mut dir = None;
    let mut name = None;
    let mut song = None;
    let mut stage = None;
    let mut don = None;

    for segment in raw.split(',') {
        let segment = segment.trim();
        let Some((attribute, value)) = segment.split_once(' ') else {
            return Err(CoerceError::InvalidSkinSegment {
                segment: segment.to_owned(),
            });
        };
        let value = value.trim();
        match attribute {
            "dir" => dir = Some(PathBuf::from(value)),
            "name" => name = Some(value.to_owned()),
            "song" => song = Some(value.to_owned()),
            "stage" => stage = Some(value.to_owned()),
            "don" => don = Some(value.to_owned()),
            _ => {
                return Err(CoerceError::UnknownSkinAttribute {
                    attribute: attribute.to_owned(),
                });
            }
        }
    }

    Ok(TaikoWebSkin {
        dir: dir.ok_or(CoerceError::MissingSkinAttribute { attribute: "dir" })?,
        name: name.ok_or(CoerceError::MissingSkinAttribute { attribute: "name" })?,
        song,
        stage,
        don,
    })
}

/// Coerces a dan-dojo exam descriptor of the form `condition,red,gold,scope`.
///
/// # Errors
///
/// Returns [`CoerceError::InvalidExamArity`] unless exactly 4 fields are
/// present, plus the faults of the per-field coercions.
pub fn coerce_dojo_gauge(raw: &str) -> Result<DojoGauge> {
    let parts: Vec<_> = raw.split(',').collect();
    let [condition, red, gold, scope] = parts.as_slice() else {
        return Err(CoerceError::InvalidExamArity { count: parts.len() });
    };
    Ok(DojoGauge {
        condition: coerce_enum(condition.trim())?,
        red_clear_requirement: coerce_int(red.trim())?,
        gold_clear_requirement: coerce_int(gold.trim())?,
        scope: coerce_enum(scope.trim())?,
    })
}
