//! Mutable shadow builders, one per document entity.
//!
//! Every field starts unset and may be assigned at most once through the
//! key dispatch; a finalize step then freezes the builder into its immutable
//! model counterpart, leaving absent fields absent.

use std::path::PathBuf;

use itertools::Itertools;

use super::ParseError;
use crate::tja::alias;
use crate::tja::model::{
    Course, CourseVariant, Difficulty, DojoGauge, Game, GaugeIncrementMethod, LocalizedString,
    Metadata, ScoreMode, Side, Style, TaikoWebSkin, TjaFile,
};
use crate::tja::value::{self, CoerceError};

/// Assigns a builder slot at most once.
///
/// The duplicate check precedes everything else so re-assignment always
/// faults with both the old (rendered) and new raw values. An empty raw
/// value is a no-op, the slot stays unset. Coercion faults are wrapped with
/// the key and the declared shape name.
fn set_once<T>(
    slot: &mut Option<T>,
    key: &str,
    raw: &str,
    shape: &'static str,
    coerce: impl FnOnce(&str) -> Result<T, CoerceError>,
    render: impl FnOnce(&T) -> String,
) -> Result<(), ParseError> {
    if let Some(old) = slot.as_ref() {
        return Err(ParseError::DuplicateKey {
            key: key.to_owned(),
            old: render(old),
            new: raw.to_owned(),
        });
    }
    if raw.is_empty() {
        return Ok(());
    }
    let value = coerce(raw).map_err(|cause| ParseError::InvalidValue {
        key: key.to_owned(),
        shape,
        cause,
    })?;
    *slot = Some(value);
    Ok(())
}

fn render_enum<T: alias::Aliased>(variant: &T) -> String {
    alias::unresolve(*variant).map_or_else(|_| format!("{variant:?}"), str::to_owned)
}

fn render_int_list(list: &[i32]) -> String {
    list.iter().join(",")
}

fn render_int_pair(pair: &(i32, Option<i32>)) -> String {
    match pair.1 {
        Some(second) => format!("{},{second}", pair.0),
        None => pair.0.to_string(),
    }
}

/// Shadow structure of one [`LocalizedString`] key family.
#[derive(Debug, Default)]
pub(super) struct LocalizedStringBuilder {
    default: Option<String>,
    ja: Option<String>,
    en: Option<String>,
    cn: Option<String>,
    tw: Option<String>,
    ko: Option<String>,
}

impl LocalizedStringBuilder {
    /// Routes a key of this family by its language suffix; the bare family
    /// name (empty suffix) addresses the default value.
    pub(super) fn set(&mut self, key: &str, suffix: &str, raw: &str) -> Result<(), ParseError> {
        let slot = match suffix {
            "" => &mut self.default,
            "JA" => &mut self.ja,
            "EN" => &mut self.en,
            "CN" => &mut self.cn,
            "TW" => &mut self.tw,
            "KO" => &mut self.ko,
            _ => {
                return Err(ParseError::UnknownKey {
                    target: "LocalizedString",
                    key: key.to_owned(),
                });
            }
        };
        set_once(slot, key, raw, "a string", value::coerce_string, Clone::clone)
    }

    pub(super) fn finish(self) -> LocalizedString {
        LocalizedString {
            default: self.default,
            ja: self.ja,
            en: self.en,
            cn: self.cn,
            tw: self.tw,
            ko: self.ko,
        }
    }
}

/// Shadow structure of [`Metadata`].
#[derive(Debug, Default)]
pub(super) struct MetadataBuilder {
    title: LocalizedStringBuilder,
    subtitle: LocalizedStringBuilder,
    bpm: Option<f64>,
    wave: Option<PathBuf>,
    offset: Option<f64>,
    demo_start: Option<f64>,
    genre: Option<String>,
    score_mode: Option<ScoreMode>,
    maker: Option<String>,
    lyrics: Option<PathBuf>,
    song_vol: Option<f64>,
    se_vol: Option<f64>,
    side: Option<Side>,
    life: Option<i32>,
    game: Option<Game>,
    head_scroll: Option<f64>,
    bg_image: Option<PathBuf>,
    bg_movie: Option<PathBuf>,
    movie_offset: Option<f64>,
    taiko_web_skin: Option<TaikoWebSkin>,
}

impl MetadataBuilder {
    /// Routes one metadata key-value pair into its field slot.
    pub(super) fn set(&mut self, key: &str, raw: &str) -> Result<(), ParseError> {
        // The localized key families are matched by prefix, so `TITLE` and
        // `TITLEJA` both land in the title builder.
        if let Some(suffix) = key.strip_prefix("SUBTITLE") {
            return self.subtitle.set(key, suffix, raw);
        }
        if let Some(suffix) = key.strip_prefix("TITLE") {
            return self.title.set(key, suffix, raw);
        }

        let path = |p: &PathBuf| p.display().to_string();
        match key {
            "BPM" => set_once(&mut self.bpm, key, raw, "a number", value::coerce_number, f64::to_string),
            "WAVE" => set_once(&mut self.wave, key, raw, "a file path", value::coerce_path, path),
            "OFFSET" => set_once(&mut self.offset, key, raw, "a number", value::coerce_number, f64::to_string),
            "DEMOSTART" => set_once(&mut self.demo_start, key, raw, "a number", value::coerce_number, f64::to_string),
            "GENRE" => set_once(&mut self.genre, key, raw, "a string", value::coerce_string, Clone::clone),
            "SCOREMODE" => set_once(&mut self.score_mode, key, raw, "a `ScoreMode` token", value::coerce_enum, render_enum),
            "MAKER" => set_once(&mut self.maker, key, raw, "a string", value::coerce_string, Clone::clone),
            "LYRICS" => set_once(&mut self.lyrics, key, raw, "a file path", value::coerce_path, path),
            "SONGVOL" => set_once(&mut self.song_vol, key, raw, "a number", value::coerce_number, f64::to_string),
            "SEVOL" => set_once(&mut self.se_vol, key, raw, "a number", value::coerce_number, f64::to_string),
            "SIDE" => set_once(&mut self.side, key, raw, "a `Side` token", value::coerce_enum, render_enum),
            "LIFE" => set_once(&mut self.life, key, raw, "an integer", value::coerce_int, i32::to_string),
            "GAME" => set_once(&mut self.game, key, raw, "a `Game` token", value::coerce_enum, render_enum),
            "HEADSCROLL" => set_once(&mut self.head_scroll, key, raw, "a number", value::coerce_number, f64::to_string),
            "BGIMAGE" => set_once(&mut self.bg_image, key, raw, "a file path", value::coerce_path, path),
            "BGMOVIE" => set_once(&mut self.bg_movie, key, raw, "a file path", value::coerce_path, path),
            "MOVIEOFFSET" => set_once(&mut self.movie_offset, key, raw, "a number", value::coerce_number, f64::to_string),
            "TAIKOWEBSKIN" => set_once(&mut self.taiko_web_skin, key, raw, "a skin descriptor", value::coerce_skin, ToString::to_string),
            _ => Err(ParseError::UnknownKey {
                target: "Metadata",
                key: key.to_owned(),
            }),
        }
    }

    pub(super) fn finish(self) -> Metadata {
        Metadata {
            title: self.title.finish(),
            subtitle: self.subtitle.finish(),
            bpm: self.bpm,
            wave: self.wave,
            offset: self.offset,
            demo_start: self.demo_start,
            genre: self.genre,
            score_mode: self.score_mode,
            maker: self.maker,
            lyrics: self.lyrics,
            song_vol: self.song_vol,
            se_vol: self.se_vol,
            side: self.side,
            life: self.life,
            game: self.game,
            head_scroll: self.head_scroll,
            bg_image: self.bg_image,
            bg_movie: self.bg_movie,
            movie_offset: self.movie_offset,
            taiko_web_skin: self.taiko_web_skin,
        }
    }
}

/// Shadow structure of one [`CourseVariant`].
#[derive(Debug)]
pub(super) struct CourseVariantBuilder {
    balloon: Option<Vec<i32>>,
    balloon_nor: Option<Vec<i32>>,
    balloon_exp: Option<Vec<i32>>,
    balloon_mas: Option<Vec<i32>>,
    score_init: Option<(i32, Option<i32>)>,
    score_diff: Option<i32>,
    style: Option<Style>,
    dojo_gauge1: Option<DojoGauge>,
    dojo_gauge2: Option<DojoGauge>,
    dojo_gauge3: Option<DojoGauge>,
    gauge_incr: Option<GaugeIncrementMethod>,
    total: Option<i32>,
    hidden_branch: Option<bool>,
    player1_commands: Option<Vec<String>>,
    player2_commands: Option<Vec<String>>,
}

impl CourseVariantBuilder {
    fn new(style: Style) -> Self {
        Self {
            balloon: None,
            balloon_nor: None,
            balloon_exp: None,
            balloon_mas: None,
            score_init: None,
            score_diff: None,
            style: Some(style),
            dojo_gauge1: None,
            dojo_gauge2: None,
            dojo_gauge3: None,
            gauge_incr: None,
            total: None,
            hidden_branch: None,
            player1_commands: None,
            player2_commands: None,
        }
    }

    /// Routes one per-variant key-value pair into its field slot.
    ///
    /// `EXAM1`..`EXAM3` are the accepted spellings of the dojo gauge slots;
    /// the field names themselves are not valid keys.
    pub(super) fn set(&mut self, key: &str, raw: &str) -> Result<(), ParseError> {
        match key {
            "BALLOON" => set_once(&mut self.balloon, key, raw, "an integer list", value::coerce_int_list, |list| render_int_list(list)),
            "BALLOONNOR" => set_once(&mut self.balloon_nor, key, raw, "an integer list", value::coerce_int_list, |list| render_int_list(list)),
            "BALLOONEXP" => set_once(&mut self.balloon_exp, key, raw, "an integer list", value::coerce_int_list, |list| render_int_list(list)),
            "BALLOONMAS" => set_once(&mut self.balloon_mas, key, raw, "an integer list", value::coerce_int_list, |list| render_int_list(list)),
            "SCOREINIT" => set_once(&mut self.score_init, key, raw, "1 or 2 integers", value::coerce_int_pair, render_int_pair),
            "SCOREDIFF" => set_once(&mut self.score_diff, key, raw, "an integer", value::coerce_int, i32::to_string),
            "EXAM1" => set_once(&mut self.dojo_gauge1, key, raw, "an exam descriptor", value::coerce_dojo_gauge, ToString::to_string),
            "EXAM2" => set_once(&mut self.dojo_gauge2, key, raw, "an exam descriptor", value::coerce_dojo_gauge, ToString::to_string),
            "EXAM3" => set_once(&mut self.dojo_gauge3, key, raw, "an exam descriptor", value::coerce_dojo_gauge, ToString::to_string),
            "GAUGEINCR" => set_once(&mut self.gauge_incr, key, raw, "a `GaugeIncrementMethod` token", value::coerce_enum, render_enum),
            "TOTAL" => set_once(&mut self.total, key, raw, "an integer", value::coerce_int, i32::to_string),
            "HIDDENBRANCH" => set_once(&mut self.hidden_branch, key, raw, "a boolean", value::coerce_bool, |b| i32::from(*b).to_string()),
            _ => Err(ParseError::UnknownKey {
                target: "CourseVariant",
                key: key.to_owned(),
            }),
        }
    }

    /// Appends one raw command-block line to the given player's block list.
    pub(super) fn push_command_line(&mut self, player2: bool, line: String) {
        let commands = if player2 {
            &mut self.player2_commands
        } else {
            &mut self.player1_commands
        };
        commands.get_or_insert_with(Vec::new).push(line);
    }

    fn finish(self) -> CourseVariant {
        CourseVariant {
            balloon: self.balloon,
            balloon_nor: self.balloon_nor,
            balloon_exp: self.balloon_exp,
            balloon_mas: self.balloon_mas,
            score_init: self.score_init,
            score_diff: self.score_diff,
            style: self.style,
            dojo_gauge1: self.dojo_gauge1,
            dojo_gauge2: self.dojo_gauge2,
            dojo_gauge3: self.dojo_gauge3,
            gauge_incr: self.gauge_incr,
            total: self.total,
            hidden_branch: self.hidden_branch,
            player1_commands: self.player1_commands,
            player2_commands: self.player2_commands,
        }
    }
}

/// Shadow structure of one [`Course`] section.
///
/// Holds both style variants from the start; the `STYLE` key only moves the
/// active pointer between them.
#[derive(Debug)]
pub(super) struct CourseBuilder {
    difficulty: Difficulty,
    stars: Option<i32>,
    single: CourseVariantBuilder,
    double: CourseVariantBuilder,
    active: Style,
}

impl CourseBuilder {
    pub(super) fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            stars: None,
            single: CourseVariantBuilder::new(Style::Single),
            double: CourseVariantBuilder::new(Style::Double),
            active: Style::Single,
        }
    }

    /// Assigns the star rating from a `LEVEL` value.
    pub(super) fn set_stars(&mut self, raw: &str) -> Result<(), ParseError> {
        set_once(&mut self.stars, "LEVEL", raw, "an integer", value::coerce_int, i32::to_string)
    }

    /// Switches which variant receives subsequent keys and command blocks.
    pub(super) fn set_active_style(&mut self, raw: &str) -> Result<(), ParseError> {
        self.active = value::coerce_enum(raw).map_err(|cause| ParseError::InvalidValue {
            key: "STYLE".to_owned(),
            shape: "a `Style` token",
            cause,
        })?;
        Ok(())
    }

    pub(super) fn active_variant_mut(&mut self) -> &mut CourseVariantBuilder {
        match self.active {
            Style::Single => &mut self.single,
            Style::Double => &mut self.double,
        }
    }

    pub(super) fn finish(self) -> Course {
        Course {
            difficulty: Some(self.difficulty),
            stars: self.stars,
            single: self.single.finish(),
            double: self.double.finish(),
        }
    }
}

/// Shadow structure of the whole document.
#[derive(Debug, Default)]
pub(super) struct TjaFileBuilder {
    pub(super) metadata: MetadataBuilder,
    pub(super) courses: Vec<Course>,
}

impl TjaFileBuilder {
    pub(super) fn finish(self) -> TjaFile {
        TjaFile {
            metadata: self.metadata.finish(),
            courses: self.courses,
        }
    }
}
