//! Calendar-based zodiac sign resolution.
//!
//! Signs are a thematic tag derived from day and month only. There is no
//! ephemeris here and the year never matters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tropical zodiac sign, serialized with its glyph ("Leo ♌")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    #[serde(rename = "Aries ♈")]
    Aries,
    #[serde(rename = "Taurus ♉")]
    Taurus,
    #[serde(rename = "Gemini ♊")]
    Gemini,
    #[serde(rename = "Cancer ♋")]
    Cancer,
    #[serde(rename = "Leo ♌")]
    Leo,
    #[serde(rename = "Virgo ♍")]
    Virgo,
    #[serde(rename = "Libra ♎")]
    Libra,
    #[serde(rename = "Scorpio ♏")]
    Scorpio,
    #[serde(rename = "Sagittarius ♐")]
    Sagittarius,
    #[serde(rename = "Capricorn ♑")]
    Capricorn,
    #[serde(rename = "Aquarius ♒")]
    Aquarius,
    #[serde(rename = "Pisces ♓")]
    Pisces,
}

/// Upper-inclusive cutoffs encoded as `month * 100 + day`, ascending.
/// The terminal 1231 entry wraps late December back to Capricorn.
const ZODIAC_CUTOFFS: [(u32, ZodiacSign); 13] = [
    (120, ZodiacSign::Capricorn),
    (219, ZodiacSign::Aquarius),
    (320, ZodiacSign::Pisces),
    (420, ZodiacSign::Aries),
    (521, ZodiacSign::Taurus),
    (621, ZodiacSign::Gemini),
    (722, ZodiacSign::Cancer),
    (822, ZodiacSign::Leo),
    (922, ZodiacSign::Virgo),
    (1022, ZodiacSign::Libra),
    (1121, ZodiacSign::Scorpio),
    (1221, ZodiacSign::Sagittarius),
    (1231, ZodiacSign::Capricorn),
];

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            ZodiacSign::Aries => '♈',
            ZodiacSign::Taurus => '♉',
            ZodiacSign::Gemini => '♊',
            ZodiacSign::Cancer => '♋',
            ZodiacSign::Leo => '♌',
            ZodiacSign::Virgo => '♍',
            ZodiacSign::Libra => '♎',
            ZodiacSign::Scorpio => '♏',
            ZodiacSign::Sagittarius => '♐',
            ZodiacSign::Capricorn => '♑',
            ZodiacSign::Aquarius => '♒',
            ZodiacSign::Pisces => '♓',
        }
    }

    /// Display label, name and glyph
    pub fn label(&self) -> String {
        format!("{} {}", self.name(), self.glyph())
    }

    /// Exact label lookup. Unknown labels (including sentinels) yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sign| sign.label() == label)
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.glyph())
    }
}

/// Resolve a sign from a birth day (1-31) and month (1-12).
///
/// Range checking belongs to the caller; out-of-range input still maps to
/// some sign.
pub fn resolve(day: u32, month: u32) -> ZodiacSign {
    let date_key = month * 100 + day;

    ZODIAC_CUTOFFS
        .iter()
        .find(|(cutoff, _)| date_key <= *cutoff)
        .map(|(_, sign)| *sign)
        .unwrap_or(ZodiacSign::Capricorn)
}
