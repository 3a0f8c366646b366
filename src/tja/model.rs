//! Data model of a decoded TJA document.
//!
//! These are plain data holders: no validation and no default-value handling
//! beyond what the format itself defines, so an absent field in the file
//! stays absent (`None`) in the model. The tree is exclusively owned by the
//! [`TjaFile`] and immutable once built.

pub mod course;
pub mod enums;
pub mod localized;
pub mod metadata;

pub use course::{Course, CourseVariant, DojoGauge};
pub use enums::{
    Difficulty, DojoGaugeCondition, DojoGaugeScope, Game, GaugeIncrementMethod, ScoreMode, Side,
    Style,
};
pub use localized::LocalizedString;
pub use metadata::{Metadata, TaikoWebSkin};

/// A fully decoded TJA document.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TjaFile {
    /// Global song metadata preceding the first course section.
    pub metadata: Metadata,
    /// Course sections, in file order.
    pub courses: Vec<Course>,
}
