//! Reading context assembly.

use chrono::NaiveDate;
use rand::Rng;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::categorizer::{categorize, QuestionCategory};
use crate::life_stage::{classify, LifeStage};
use crate::types::{BirthDetails, Season};

/// Planetary flavour woven into a reading
pub const COSMIC_INFLUENCES: [&str; 8] = [
    "current planetary transits",
    "lunar cycle energies",
    "seasonal cosmic shifts",
    "mercury communication patterns",
    "venus love vibrations",
    "mars action energies",
    "jupiter expansion cycles",
    "saturn wisdom lessons",
];

/// Tone the reading should take
pub const READING_APPROACHES: [&str; 8] = [
    "intuitive and insightful",
    "practical and grounding",
    "transformational and empowering",
    "nurturing and supportive",
    "direct and clarifying",
    "mystical and deep",
    "energizing and motivational",
    "healing and restorative",
];

/// Semantic context for one reading. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingContext {
    pub life_stage: LifeStage,
    /// Source of the linked focus-area / cosmic-guidance pair
    pub category: QuestionCategory,
    /// Season of the reading date
    pub season: Season,
    /// Season of the birth date
    pub birth_season: Season,
    pub cosmic_influence: &'static str,
    pub reading_style: &'static str,
    pub birth_month: String,
}

impl ReadingContext {
    pub fn focus_area(&self) -> &'static str {
        self.category.focus_area()
    }

    pub fn cosmic_guidance(&self) -> &'static str {
        self.category.cosmic_guidance()
    }
}

impl Serialize for ReadingContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ReadingContext", 8)?;
        state.serialize_field("life_stage", &self.life_stage)?;
        state.serialize_field("focus_area", self.focus_area())?;
        state.serialize_field("cosmic_guidance", self.cosmic_guidance())?;
        state.serialize_field("season", &self.season)?;
        state.serialize_field("cosmic_influence", self.cosmic_influence)?;
        state.serialize_field("reading_style", self.reading_style)?;
        state.serialize_field("birth_month", &self.birth_month)?;
        state.serialize_field("birth_season", &self.birth_season)?;
        state.end()
    }
}

/// Uniform pick from a fixed, non-empty candidate set (one draw).
pub fn pick<R: Rng + ?Sized>(candidates: &[&'static str], rng: &mut R) -> &'static str {
    candidates[rng.gen_range(0..candidates.len())]
}

/// Combine zodiac-independent facts about the client into a context record.
///
/// Consumes exactly two draws from `rng`: cosmic influence, then reading
/// style.
pub fn assemble<R: Rng + ?Sized>(
    details: &BirthDetails,
    question: &str,
    now: NaiveDate,
    rng: &mut R,
) -> ReadingContext {
    let cosmic_influence = pick(&COSMIC_INFLUENCES, rng);
    let reading_style = pick(&READING_APPROACHES, rng);

    ReadingContext {
        life_stage: classify(details.birth_date, now),
        category: categorize(question),
        season: Season::from_date(now),
        birth_season: Season::from_date(details.birth_date),
        cosmic_influence,
        reading_style,
        birth_month: details.birth_month_name(),
    }
}
