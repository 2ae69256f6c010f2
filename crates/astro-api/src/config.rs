//! API server configuration.

use astro_agents::{GenerationConfig, GEMINI_BASE_URL};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Prefix for environment overrides, e.g. `ASTRO_HTTP__BIND_ADDR`
pub const ENV_PREFIX: &str = "ASTRO";

/// Key read when no API key is configured under `ASTRO_PROVIDER__API_KEY`
pub const LEGACY_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Time kept free between the generation deadline and the HTTP deadline,
/// enough to compose and send the fallback reading
pub const GENERATION_HEADROOM_MS: u64 = 5_000;

/// Complete server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// HTTP server configuration
    pub http: HttpConfig,

    /// Text model provider endpoint and credentials
    pub provider: ProviderConfig,

    /// Sampling parameters handed to the generation client
    pub generation: GenerationConfig,

    /// CORS configuration
    pub cors: CorsConfig,

    /// Attach generation failure details to API responses
    pub debug: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub bind_addr: SocketAddr,

    /// Request timeout (seconds)
    pub timeout_secs: u64,

    /// Maximum request body size (bytes)
    pub max_body_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Gemini API key; readings use the fallback text when absent
    pub api_key: Option<String>,

    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allowed origins
    pub allowed_origins: Vec<String>,

    /// Allowed methods
    pub allowed_methods: Vec<String>,

    /// Allowed headers
    pub allowed_headers: Vec<String>,

    /// Max age (seconds)
    pub max_age_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            timeout_secs: 30,
            max_body_size: 64 * 1024,
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:5000".to_string()],
            allowed_methods: vec!["GET".to_string(), "POST".to_string(), "OPTIONS".to_string()],
            allowed_headers: vec!["Content-Type".to_string()],
            max_age_secs: 3600,
        }
    }
}

impl ProviderConfig {
    /// Configured key, ignoring blank values
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl ApiConfig {
    /// Load configuration from an optional file, then environment overrides
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(Self::environment())
            .build()?;

        Ok(settings.try_deserialize::<Self>()?.with_legacy_api_key())
    }

    /// Deadline for one generation attempt: the configured client timeout,
    /// capped so it always expires before the HTTP request timeout.
    pub fn generation_budget(&self) -> Duration {
        let http_ms = self.http.timeout_secs.saturating_mul(1000);
        let ceiling = http_ms
            .saturating_sub(GENERATION_HEADROOM_MS)
            .max(http_ms / 2);
        Duration::from_millis(self.generation.timeout_ms.min(ceiling))
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    fn with_legacy_api_key(mut self) -> Self {
        if self.provider.api_key().is_none() {
            self.provider.api_key = std::env::var(LEGACY_API_KEY_VAR)
                .ok()
                .filter(|key| !key.trim().is_empty());
        }
        self
    }
}
