//! Google Gemini text-generation client.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::time::Duration;

use crate::agent::{AgentError, AgentResult, GenerationConfig, TextGenerator};

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GeminiGenerator {
    api_key: String,
    base_url: String,
    config: GenerationConfig,
    client: reqwest::Client,
}

impl GeminiGenerator {
    pub fn new(api_key: impl Into<String>, config: GenerationConfig) -> AgentResult<Self> {
        Self::with_base_url(api_key, GEMINI_BASE_URL, config)
    }

    /// Point the client at another host (proxies, test servers).
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        config: GenerationConfig,
    ) -> AgentResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| AgentError::Llm(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            config,
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.config.model
        )
    }

    fn request_body(&self, prompt: &str) -> Value {
        json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "temperature": self.config.temperature,
                "topP": self.config.top_p,
                "topK": self.config.top_k,
                "maxOutputTokens": self.config.max_output_tokens,
                "candidateCount": self.config.candidate_count,
            }
        })
    }
}

/// Text of the first candidate, all parts concatenated. Missing pieces give
/// an empty string rather than an error.
pub fn extract_candidate_text(response: &Value) -> String {
    response["candidates"][0]["content"]["parts"]
        .as_array()
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part["text"].as_str())
                .collect::<String>()
        })
        .unwrap_or_default()
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> AgentResult<String> {
        self.validate_input(prompt)?;

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AgentError::Timeout(self.config.timeout_ms)
                } else {
                    AgentError::Llm(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(AgentError::RateLimit);
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AgentError::Llm(format!("API error {}: {}", status, error_text)));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| AgentError::Llm(format!("Failed to parse response: {}", e)))?;

        let text = extract_candidate_text(&response_json);

        tracing::debug!(
            model = %self.config.model,
            chars = text.len(),
            finish_reason = response_json["candidates"][0]["finishReason"].as_str().unwrap_or("unknown"),
            "Gemini generation finished"
        );

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ENDPOINT: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

    async fn generator_for(server: &MockServer) -> GeminiGenerator {
        GeminiGenerator::with_base_url("test-key", server.uri(), GenerationConfig::default()).unwrap()
    }

    #[test]
    fn test_request_body_carries_generation_config() {
        let generator =
            GeminiGenerator::new("test-key", GenerationConfig::default()).unwrap();
        let body = generator.request_body("Hello");

        assert_eq!(body["contents"][0]["parts"][0]["text"], "Hello");
        assert_eq!(body["generationConfig"]["topK"], 35);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 450);
        assert_eq!(body["generationConfig"]["candidateCount"], 1);
        assert!(generator.endpoint().ends_with("gemini-2.0-flash:generateContent"));
    }

    #[test]
    fn test_extract_candidate_text() {
        let response = json!({
            "candidates": [{ "content": { "parts": [{ "text": "Dear " }, { "text": "Sam" }] } }]
        });
        assert_eq!(extract_candidate_text(&response), "Dear Sam");
        assert_eq!(extract_candidate_text(&json!({})), "");
    }

    #[tokio::test]
    async fn test_generate_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({ "generationConfig": { "topK": 35 } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "The stars favour you." }] },
                    "finishReason": "STOP"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = generator_for(&server).await.generate("prompt").await.unwrap();
        assert_eq!(text, "The stars favour you.");
    }

    #[tokio::test]
    async fn test_generate_without_candidates_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let text = generator_for(&server).await.generate("prompt").await.unwrap();
        assert!(text.is_empty());
    }

    #[tokio::test]
    async fn test_generate_maps_http_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = generator_for(&server).await.generate("prompt").await.unwrap_err();
        assert!(matches!(err, AgentError::Llm(ref msg) if msg.contains("boom")));
    }

    #[tokio::test]
    async fn test_generate_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let err = generator_for(&server).await.generate("prompt").await.unwrap_err();
        assert!(matches!(err, AgentError::RateLimit));
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_prompt() {
        let server = MockServer::start().await;
        let err = generator_for(&server).await.generate("   ").await.unwrap_err();
        assert!(matches!(err, AgentError::InvalidInput(_)));
    }
}
