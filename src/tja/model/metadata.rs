//! This module introduces struct [`Metadata`], the global song attributes
//! preceding the first course section.

use std::fmt;
use std::path::PathBuf;

use super::enums::{Game, ScoreMode, Side};
use super::localized::LocalizedString;

/// Global, file-level attributes of a TJA chart.
///
/// Attempts a one-to-one representation of the file: no validation and no
/// default-value handling, so every field except [`Metadata::title`] and
/// [`Metadata::subtitle`] is optional exactly as in the format itself.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// The song title, `TITLE` key family.
    pub title: LocalizedString,
    /// The song subtitle, `SUBTITLE` key family. Usually the artist credit.
    pub subtitle: LocalizedString,
    /// Tempo at the start of the song, `BPM`.
    pub bpm: Option<f64>,
    /// Path to the song audio file, `WAVE`.
    pub wave: Option<PathBuf>,
    /// Offset in seconds between audio start and the first measure, `OFFSET`.
    pub offset: Option<f64>,
    /// Song-select preview start position in seconds, `DEMOSTART`.
    pub demo_start: Option<f64>,
    /// The genre the song is sorted under, `GENRE`.
    pub genre: Option<String>,
    /// Scoring generation override, `SCOREMODE`.
    pub score_mode: Option<ScoreMode>,
    /// Who authored the chart, `MAKER`.
    pub maker: Option<String>,
    /// Path to a lyrics file, `LYRICS`.
    pub lyrics: Option<PathBuf>,
    /// Song volume percentage, `SONGVOL`.
    pub song_vol: Option<f64>,
    /// Sound-effect volume percentage, `SEVOL`.
    pub se_vol: Option<f64>,
    /// Which song-select side the song appears on, `SIDE`.
    pub side: Option<Side>,
    /// Life limit for the gauge, `LIFE`.
    pub life: Option<i32>,
    /// The game variant the chart targets, `GAME`.
    pub game: Option<Game>,
    /// Initial scroll speed multiplier, `HEADSCROLL`.
    pub head_scroll: Option<f64>,
    /// Path to a background image, `BGIMAGE`.
    pub bg_image: Option<PathBuf>,
    /// Path to a background movie, `BGMOVIE`.
    pub bg_movie: Option<PathBuf>,
    /// Offset in seconds for the background movie, `MOVIEOFFSET`.
    pub movie_offset: Option<f64>,
    /// taiko-web skin descriptor, `TAIKOWEBSKIN`.
    pub taiko_web_skin: Option<TaikoWebSkin>,
}

/// A taiko-web song skin descriptor.
///
/// Decoded from a comma-separated attribute list such as
/// `dir ../song_skins,name miku,song miku`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaikoWebSkin {
    /// Directory the skin assets live in, `dir` attribute.
    pub dir: PathBuf,
    /// Skin name, `name` attribute.
    pub name: String,
    /// Song sub-skin name, `song` attribute.
    pub song: Option<String>,
    /// Stage sub-skin name, `stage` attribute.
    pub stage: Option<String>,
    /// Don sub-skin name, `don` attribute.
    pub don: Option<String>,
}

impl fmt::Display for TaikoWebSkin {
    /// Renders the attribute-list form the descriptor was decoded from.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dir {},name {}", self.dir.display(), self.name)?;
        for (attribute, value) in [
            ("song", &self.song),
            ("stage", &self.stage),
            ("don", &self.don),
        ] {
            if let Some(value) = value {
                write!(f, ",{attribute} {value}")?;
            }
        }
        Ok(())
    }
}
