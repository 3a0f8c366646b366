//! This module introduces structs [`Course`] and [`CourseVariant`], one
//! difficulty's worth of chart data.

use std::fmt;

use super::enums::{Difficulty, DojoGaugeCondition, DojoGaugeScope, GaugeIncrementMethod, Style};
use crate::tja::alias;

/// One course section of a TJA file.
///
/// Both style variants are always present; a course that defines only one
/// style leaves the other with all fields unset.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Course {
    /// The difficulty fixed by the `COURSE` header.
    pub difficulty: Option<Difficulty>,
    /// Star rating, `LEVEL`.
    pub stars: Option<i32>,
    /// The single-player variant.
    pub single: CourseVariant,
    /// The two-player variant.
    pub double: CourseVariant,
}

/// The per-style tuning data and command blocks of a course.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CourseVariant {
    /// Balloon hit counts in appearance order, `BALLOON`.
    pub balloon: Option<Vec<i32>>,
    /// Balloon hit counts of the normal branch, `BALLOONNOR`.
    pub balloon_nor: Option<Vec<i32>>,
    /// Balloon hit counts of the expert branch, `BALLOONEXP`.
    pub balloon_exp: Option<Vec<i32>>,
    /// Balloon hit counts of the master branch, `BALLOONMAS`.
    pub balloon_mas: Option<Vec<i32>>,
    /// Points for the first good hit, `SCOREINIT`. The documented form is a
    /// single integer, but a second optional value sets the score used in
    /// shin-uchi mode.
    pub score_init: Option<(i32, Option<i32>)>,
    /// Points added to each good hit per gauge step, `SCOREDIFF`. Ignored
    /// entirely in shin-uchi mode, so it has no second value.
    pub score_diff: Option<i32>,
    /// The play style this variant holds, preset by the decoder.
    pub style: Option<Style>,
    /// First dan-dojo exam requirement, `EXAM1`.
    pub dojo_gauge1: Option<DojoGauge>,
    /// Second dan-dojo exam requirement, `EXAM2`.
    pub dojo_gauge2: Option<DojoGauge>,
    /// Third dan-dojo exam requirement, `EXAM3`.
    pub dojo_gauge3: Option<DojoGauge>,
    /// Gauge increment rounding method, `GAUGEINCR`.
    pub gauge_incr: Option<GaugeIncrementMethod>,
    /// Gauge total, `TOTAL`.
    pub total: Option<i32>,
    /// Whether branch indicators are hidden, `HIDDENBRANCH`.
    pub hidden_branch: Option<bool>,
    /// Raw lines of the player-1 command blocks, markers included. The
    /// interior note sub-language is opaque to this decoder.
    pub player1_commands: Option<Vec<String>>,
    /// Raw lines of the player-2 command blocks, markers included.
    pub player2_commands: Option<Vec<String>>,
}

/// One dan-dojo exam requirement, the value of an `EXAM1`..`EXAM3` key.
///
/// Decoded from the 4-field form `condition,red,gold,scope`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DojoGauge {
    /// The quantity the exam measures.
    pub condition: DojoGaugeCondition,
    /// Requirement for a red (normal) clear.
    pub red_clear_requirement: i32,
    /// Requirement for a gold clear.
    pub gold_clear_requirement: i32,
    /// Whether the requirements are floors or ceilings.
    pub scope: DojoGaugeScope,
}

impl fmt::Display for DojoGauge {
    /// Renders the 4-field form the requirement was decoded from, using
    /// canonical tokens.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let condition = alias::unresolve(self.condition).unwrap_or("?");
        let scope = alias::unresolve(self.scope).unwrap_or("?");
        write!(
            f,
            "{condition},{},{},{scope}",
            self.red_clear_requirement, self.gold_clear_requirement
        )
    }
}
