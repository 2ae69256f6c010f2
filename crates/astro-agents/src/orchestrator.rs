//! Reading orchestrator: context, prompt, one generation attempt, fallback.

use astro_core::{assemble, resolve, ReadingContext, ReadingId, ReadingInput, ZodiacSign};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::agent::{AgentError, TextGenerator};
use crate::composer::{compose_with_layout, PromptLayout};
use crate::fallback::{
    compose_fallback, FALLBACK_DEFAULT_NAME, FALLBACK_DEFAULT_QUESTION, FALLBACK_SENTINEL_SIGN,
};

/// Terminal outcome of a reading request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReadingKind {
    /// The model returned non-empty text
    AiReading,
    /// The model was unavailable, empty or failing
    FallbackReading,
}

/// Everything computed before the model call
#[derive(Debug, Clone, Serialize)]
pub struct PreparedReading {
    pub zodiac: ZodiacSign,
    pub context: ReadingContext,
    pub prompt: String,
}

/// Complete reading result
#[derive(Debug, Clone, Serialize)]
pub struct Reading {
    pub id: ReadingId,
    pub input: ReadingInput,
    pub zodiac: ZodiacSign,
    pub context: ReadingContext,
    pub kind: ReadingKind,
    /// Text shown to the client, generated or assembled
    pub text: String,
    /// Generation error, when the model call itself failed
    pub failure: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl Reading {
    pub fn is_ai(&self) -> bool {
        self.kind == ReadingKind::AiReading
    }

    /// The model call errored (as opposed to returning nothing)
    pub fn generation_failed(&self) -> bool {
        self.failure.is_some()
    }
}

/// Deadline for one generation attempt unless configured otherwise
pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(25);

/// Stateless coordinator; share it behind an `Arc`.
pub struct ReadingOrchestrator {
    generator: Arc<dyn TextGenerator>,
    generation_timeout: Duration,
}

impl ReadingOrchestrator {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            generation_timeout: DEFAULT_GENERATION_TIMEOUT,
        }
    }

    /// Bound each generation attempt. Must stay below any deadline the
    /// caller enforces around the whole reading.
    pub fn with_generation_timeout(mut self, timeout: Duration) -> Self {
        self.generation_timeout = timeout;
        self
    }

    pub fn generation_timeout(&self) -> Duration {
        self.generation_timeout
    }

    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }

    /// Derive sign, context and prompt. Three draws from `rng`.
    pub fn prepare<R: Rng + ?Sized>(
        &self,
        input: &ReadingInput,
        layout: PromptLayout,
        today: NaiveDate,
        rng: &mut R,
    ) -> PreparedReading {
        let details = &input.details;
        let zodiac = resolve(details.birth_date.day(), details.birth_date.month());
        let context = assemble(details, &input.question, today, rng);
        let prompt = compose_with_layout(details, zodiac, &context, &input.question, layout, rng);

        PreparedReading {
            zodiac,
            context,
            prompt,
        }
    }

    /// Produce a reading with the current time and a fresh random source.
    pub async fn generate(&self, input: &ReadingInput, layout: PromptLayout) -> Reading {
        let mut rng = StdRng::from_entropy();
        self.generate_with(input, layout, Utc::now(), &mut rng).await
    }

    /// Produce a reading. Makes exactly one generation attempt and never
    /// fails: empty or failed generations become fallback readings.
    pub async fn generate_with<R: Rng + Send + ?Sized>(
        &self,
        input: &ReadingInput,
        layout: PromptLayout,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Reading {
        let id = ReadingId::new();
        let prepared = self.prepare(input, layout, now.date_naive(), rng);

        tracing::debug!(
            reading_id = %id,
            generator = self.generator.name(),
            prompt_chars = prepared.prompt.len(),
            "Requesting generated reading"
        );

        let outcome = tokio::time::timeout(
            self.generation_timeout,
            self.generator.generate(&prepared.prompt),
        )
        .await
        .unwrap_or_else(|_| Err(AgentError::Timeout(self.generation_timeout.as_millis() as u64)));

        let (kind, text, failure) = match outcome {
            Ok(text) if !text.trim().is_empty() => (ReadingKind::AiReading, text, None),
            Ok(_) => {
                tracing::info!(reading_id = %id, "Generator returned no text, using fallback");
                (ReadingKind::FallbackReading, self.fallback_text(input, prepared.zodiac, rng), None)
            }
            Err(e) => {
                tracing::warn!(reading_id = %id, error = %e, "Generation failed, using fallback");
                (
                    ReadingKind::FallbackReading,
                    self.fallback_text(input, prepared.zodiac, rng),
                    Some(e.to_string()),
                )
            }
        };

        tracing::info!(
            reading_id = %id,
            zodiac = %prepared.zodiac,
            category = ?prepared.context.category,
            outcome = ?kind,
            "Reading complete"
        );

        Reading {
            id,
            input: input.clone(),
            zodiac: prepared.zodiac,
            context: prepared.context,
            kind,
            text,
            failure,
            generated_at: now,
        }
    }

    fn fallback_text<R: Rng + ?Sized>(
        &self,
        input: &ReadingInput,
        zodiac: ZodiacSign,
        rng: &mut R,
    ) -> String {
        compose_fallback(&input.details.name, &zodiac.label(), &input.question, rng)
    }
}

/// Fallback for requests that failed before a sign was computed. Blank or
/// absent values fall back to "Seeker" and "guidance".
pub fn fallback_for(name: Option<&str>, question: Option<&str>) -> String {
    fallback_for_with(name, question, &mut StdRng::from_entropy())
}

pub fn fallback_for_with<R: Rng + ?Sized>(
    name: Option<&str>,
    question: Option<&str>,
    rng: &mut R,
) -> String {
    let name = name
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(FALLBACK_DEFAULT_NAME);
    let question = question
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(FALLBACK_DEFAULT_QUESTION);

    compose_fallback(name, FALLBACK_SENTINEL_SIGN, question, rng)
}

impl Default for ReadingOrchestrator {
    fn default() -> Self {
        Self::new(Arc::new(crate::agent::DisabledGenerator))
    }
}
