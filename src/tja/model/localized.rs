//! This module introduces struct [`LocalizedString`], a per-language family
//! of values for a single metadata field.

/// A string value that may differ depending on the player's localization
/// preference.
///
/// Built from a key family such as `TITLE`, `TITLEJA`, `TITLEEN`, ... . No
/// field is structurally required: the format conventionally always supplies
/// the default value, but its absence is representable.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalizedString {
    /// Value used when no preferred translation is set.
    pub default: Option<String>,
    /// Japanese localized value.
    pub ja: Option<String>,
    /// English localized value.
    pub en: Option<String>,
    /// Simplified Chinese localized value.
    pub cn: Option<String>,
    /// Traditional Chinese localized value.
    pub tw: Option<String>,
    /// Korean localized value.
    pub ko: Option<String>,
}
