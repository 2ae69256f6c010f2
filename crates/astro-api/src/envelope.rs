//! Response envelopes. Both shapes are views over the same [`Reading`].

use astro_agents::Reading;
use astro_core::{LifeStage, ReadingContext, ZodiacSign};
use serde::Serialize;

/// Full-detail envelope served by `POST /result`
#[derive(Debug, Clone, Serialize)]
pub struct DetailedReadingResponse {
    pub success: bool,
    pub name: String,
    pub dob: String,
    pub tob: String,
    pub pob: String,
    pub zodiac: ZodiacSign,
    pub question: String,
    pub ai_answer: String,
    pub reading_context: ReadingContext,
}

impl From<&Reading> for DetailedReadingResponse {
    fn from(reading: &Reading) -> Self {
        let details = &reading.input.details;
        Self {
            success: true,
            name: details.name.clone(),
            dob: details.iso_birth_date(),
            tob: details.birth_time.clone(),
            pob: details.birth_place.clone(),
            zodiac: reading.zodiac,
            question: reading.input.question.clone(),
            ai_answer: reading.text.clone(),
            reading_context: reading.context.clone(),
        }
    }
}

/// Condensed envelope served by `POST /api/reading`
#[derive(Debug, Clone, Serialize)]
pub struct CondensedReadingResponse {
    pub success: bool,
    pub reading: CondensedReading,
    /// Generation failure, only reported in debug mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CondensedReading {
    pub name: String,
    /// "June 15, 1990"
    pub birth_date: String,
    pub birth_time: String,
    pub birth_place: String,
    pub zodiac_sign: ZodiacSign,
    pub question: String,
    /// The reading text itself
    pub cosmic_guidance: String,
    /// RFC 3339 time the reading was produced
    pub reading_timestamp: String,
    pub life_stage: LifeStage,
    pub focus_area: &'static str,
}

impl CondensedReadingResponse {
    pub fn new(reading: &Reading, debug: bool) -> Self {
        let details = &reading.input.details;
        Self {
            success: true,
            reading: CondensedReading {
                name: details.name.clone(),
                birth_date: details.display_birth_date(),
                birth_time: details.birth_time.clone(),
                birth_place: details.birth_place.clone(),
                zodiac_sign: reading.zodiac,
                question: reading.input.question.clone(),
                cosmic_guidance: reading.text.clone(),
                reading_timestamp: reading.generated_at.to_rfc3339(),
                life_stage: reading.context.life_stage,
                focus_area: reading.context.focus_area(),
            },
            details: if debug { reading.failure.clone() } else { None },
        }
    }
}

/// Error envelope; `fallback_reading` is attached on the full-detail path
#[derive(Debug, Clone, Serialize)]
pub struct FailureResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reading: Option<String>,
}

impl FailureResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            fallback_reading: None,
        }
    }

    pub fn with_fallback(mut self, reading: String) -> Self {
        self.fallback_reading = Some(reading);
        self
    }
}
