//! Text-generation client trait and common types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result type for generation calls
pub type AgentResult<T> = Result<T, AgentError>;

/// Generation failures. Every variant is recovered by the fallback reading.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("LLM inference error: {0}")]
    Llm(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Rate limit exceeded")]
    RateLimit,

    #[error("Text generation is not configured")]
    NotConfigured,
}

/// External text model: one prompt in, generated text out.
///
/// Implementations own their generation parameters; callers only hand over
/// the prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generator name/identifier
    fn name(&self) -> &str;

    /// Single generation attempt. `Ok("")` means the model produced nothing.
    async fn generate(&self, prompt: &str) -> AgentResult<String>;

    fn validate_input(&self, prompt: &str) -> AgentResult<()> {
        if prompt.trim().is_empty() {
            Err(AgentError::InvalidInput("Empty prompt".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Sampling parameters sent with every generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Model to use (e.g., "gemini-2.0-flash")
    pub model: String,
    pub temperature: f32,
    /// Nucleus sampling
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub candidate_count: u32,
    /// Whole-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".to_string(),
            temperature: 0.9,
            top_p: 0.85,
            top_k: 35,
            max_output_tokens: 450,
            candidate_count: 1,
            timeout_ms: 30_000,
        }
    }
}

/// Stand-in used when no model credentials are configured. Every call fails,
/// which routes each request to the fallback reading.
#[derive(Debug, Clone, Default)]
pub struct DisabledGenerator;

#[async_trait]
impl TextGenerator for DisabledGenerator {
    fn name(&self) -> &str {
        "disabled"
    }

    async fn generate(&self, _prompt: &str) -> AgentResult<String> {
        Err(AgentError::NotConfigured)
    }
}
