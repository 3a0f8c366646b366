//! Enumerated field values and their textual alias tables.
//!
//! Each variant declares one canonical serialized token plus the alternate
//! spellings accepted by the format, consulted through [`crate::tja::alias`].

use crate::tja::alias::{AliasSpec, Aliased};

/// Declares [`Aliased`] for an enum from a per-variant token table.
macro_rules! alias_table {
    ($ty:ident { $($variant:ident => $canonical:literal $(| $alias:literal)*,)+ }) => {
        impl Aliased for $ty {
            fn variants() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            fn alias_spec(self) -> Option<AliasSpec> {
                Some(match self {
                    $(Self::$variant => AliasSpec {
                        canonical: $canonical,
                        aliases: &[$($alias),*],
                    },)+
                })
            }
        }
    };
}

/// The difficulty of a course section, fixed by its `COURSE` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    /// Easy (かんたん).
    Easy,
    /// Normal (ふつう).
    Normal,
    /// Hard (むずかしい).
    Hard,
    /// Oni (おに).
    Oni,
    /// Inner/Ura Oni, also spelled `Edit` by some simulators.
    Ura,
    /// Tower mode course.
    Tower,
    /// Dan (ranked exam) course.
    Dan,
}

alias_table!(Difficulty {
    Easy => "Easy" | "0",
    Normal => "Normal" | "1",
    Hard => "Hard" | "2",
    Oni => "Oni" | "3",
    Ura => "Ura" | "Edit" | "4",
    Tower => "Tower" | "5",
    Dan => "Dan" | "6",
});

/// The play style of a course variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Style {
    /// One-player chart.
    Single,
    /// Two-player chart.
    Double,
}

alias_table!(Style {
    Single => "Single" | "1",
    Double => "Double" | "Couple" | "2",
});

/// Which song-select side the song appears on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// Normal side only.
    Normal,
    /// Ex side only.
    Ex,
    /// Both sides.
    Both,
}

alias_table!(Side {
    Normal => "Normal" | "1",
    Ex => "Ex" | "2",
    Both => "Both" | "3",
});

/// The arcade scoring generation to emulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoreMode {
    /// AC generation 0 scoring.
    AcGen0,
    /// AC generations 1 to 7 scoring.
    AcGen1To7,
    /// AC generations 8 to 14 scoring.
    AcGen8To14,
}

alias_table!(ScoreMode {
    AcGen0 => "2",
    AcGen1To7 => "0",
    AcGen8To14 => "1",
});

/// Rounding method applied to each gauge increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GaugeIncrementMethod {
    /// Round to the nearest representable increment.
    Normal,
    /// Round down.
    Floor,
    /// Round half up.
    Round,
    /// No rounding.
    NotFix,
    /// Round up.
    Ceiling,
}

alias_table!(GaugeIncrementMethod {
    Normal => "Normal",
    Floor => "Floor",
    Round => "Round",
    NotFix => "NotFix",
    Ceiling => "Ceiling",
});

/// The game variant the chart targets. Defaults to [`Game::Taiko`]; with
/// [`Game::Jube`] the game is forced into autoplay mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Game {
    /// A taiko drum chart.
    Taiko,
    /// A jubeat-style chart.
    Jube,
}

alias_table!(Game {
    Taiko => "Taiko",
    Jube => "Jube",
});

/// The quantity a dan-dojo exam measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DojoGaugeCondition {
    /// Final gauge percentage.
    Percentage,
    /// Count of GOOD hits.
    GoodAmount,
    /// Count of OK hits.
    OkAmount,
    /// Count of BAD hits.
    BadAmount,
    /// Final score.
    Score,
    /// Drumroll hit count.
    Drumroll,
    /// Total hit count.
    TotalHits,
    /// Maximum combo.
    MaxCombo,
}

alias_table!(DojoGaugeCondition {
    Percentage => "g",
    GoodAmount => "jp",
    OkAmount => "jg",
    BadAmount => "jb",
    Score => "s",
    Drumroll => "r",
    TotalHits => "h",
    MaxCombo => "c",
});

/// Whether an exam requirement is a floor or a ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DojoGaugeScope {
    /// The measured quantity must be at least the requirement.
    More,
    /// The measured quantity must be at most the requirement.
    Less,
}

alias_table!(DojoGaugeScope {
    More => "m",
    Less => "l",
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tja::alias::{resolve, unresolve};

    #[test]
    fn every_declared_token_resolves_and_unresolves() {
        fn check<T: Aliased>() {
            for &variant in T::variants() {
                let spec = variant.alias_spec().expect("production enums declare all variants");
                assert_eq!(resolve::<T>(spec.canonical), Ok(variant));
                for &alias in spec.aliases {
                    assert_eq!(resolve::<T>(alias), Ok(variant));
                }
                assert_eq!(unresolve(variant), Ok(spec.canonical));
            }
        }

        check::<Difficulty>();
        check::<Style>();
        check::<Side>();
        check::<ScoreMode>();
        check::<GaugeIncrementMethod>();
        check::<Game>();
        check::<DojoGaugeCondition>();
        check::<DojoGaugeScope>();
    }

    #[test]
    fn alternate_spellings() {
        assert_eq!(resolve::<Difficulty>("Edit"), Ok(Difficulty::Ura));
        assert_eq!(resolve::<Difficulty>("3"), Ok(Difficulty::Oni));
        assert_eq!(resolve::<Style>("Couple"), Ok(Style::Double));
        // Unresolve yields the canonical token, not the alias used to resolve.
        assert_eq!(unresolve(Difficulty::Ura), Ok("Ura"));
    }

    #[test]
    fn score_mode_tokens_are_not_in_declaration_order() {
        assert_eq!(resolve::<ScoreMode>("0"), Ok(ScoreMode::AcGen1To7));
        assert_eq!(resolve::<ScoreMode>("1"), Ok(ScoreMode::AcGen8To14));
        assert_eq!(resolve::<ScoreMode>("2"), Ok(ScoreMode::AcGen0));
    }
}
