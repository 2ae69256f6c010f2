//! Prompt composition: template selection and client-detail interpolation.

use astro_core::{BirthDetails, ReadingContext, ZodiacSign};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::prompts::{
    format_condensed_request, format_detailed_request, LIFE_PATH_PROMPT, PERSONAL_GROWTH_PROMPT,
    SPIRITUAL_HEALING_PROMPT, SUCCESS_MANIFESTATION_PROMPT,
};

/// Instruction block placed ahead of the client details
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptTemplate {
    PersonalGrowth,
    LifePath,
    SpiritualHealing,
    SuccessManifestation,
}

impl PromptTemplate {
    pub const ALL: [PromptTemplate; 4] = [
        PromptTemplate::PersonalGrowth,
        PromptTemplate::LifePath,
        PromptTemplate::SpiritualHealing,
        PromptTemplate::SuccessManifestation,
    ];

    /// Uniform pick, one draw
    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn instructions(&self) -> &'static str {
        match self {
            PromptTemplate::PersonalGrowth => PERSONAL_GROWTH_PROMPT,
            PromptTemplate::LifePath => LIFE_PATH_PROMPT,
            PromptTemplate::SpiritualHealing => SPIRITUAL_HEALING_PROMPT,
            PromptTemplate::SuccessManifestation => SUCCESS_MANIFESTATION_PROMPT,
        }
    }
}

/// Shape of the client block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptLayout {
    /// Client details, reading context and closing directives
    #[default]
    Detailed,
    /// Single block with numbered directives
    Condensed,
}

/// Compose the full prompt with the detailed layout.
pub fn compose<R: Rng + ?Sized>(
    details: &BirthDetails,
    zodiac: ZodiacSign,
    context: &ReadingContext,
    question: &str,
    rng: &mut R,
) -> String {
    compose_with_layout(details, zodiac, context, question, PromptLayout::Detailed, rng)
}

pub fn compose_with_layout<R: Rng + ?Sized>(
    details: &BirthDetails,
    zodiac: ZodiacSign,
    context: &ReadingContext,
    question: &str,
    layout: PromptLayout,
    rng: &mut R,
) -> String {
    let template = PromptTemplate::choose(rng);
    tracing::debug!(?template, ?layout, "Selected prompt template");

    render(template, details, zodiac, context, question, layout)
}

/// Interpolate a known template. Pure; no randomness.
pub fn render(
    template: PromptTemplate,
    details: &BirthDetails,
    zodiac: ZodiacSign,
    context: &ReadingContext,
    question: &str,
    layout: PromptLayout,
) -> String {
    let zodiac_label = zodiac.label();
    let birth_date = details.display_birth_date();

    let client_block = match layout {
        PromptLayout::Detailed => format_detailed_request(
            &details.name,
            &birth_date,
            context.birth_season.as_str(),
            &details.birth_time,
            &details.birth_place,
            &zodiac_label,
            context.life_stage.label(),
            question,
            context.focus_area(),
            context.cosmic_guidance(),
            context.season.as_str(),
            context.cosmic_influence,
            context.reading_style,
        ),
        PromptLayout::Condensed => format_condensed_request(
            &details.name,
            &birth_date,
            &details.birth_time,
            &details.birth_place,
            &zodiac_label,
            context.life_stage.label(),
            question,
            context.focus_area(),
            context.cosmic_guidance(),
            context.reading_style,
            context.cosmic_influence,
        ),
    };

    format!("{}\n\n{}", template.instructions(), client_block)
}
