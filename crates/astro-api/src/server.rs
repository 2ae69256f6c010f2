//! Server startup.

use astro_agents::{DisabledGenerator, GeminiGenerator, ReadingOrchestrator, TextGenerator};
use std::sync::Arc;

use crate::config::ApiConfig;
use crate::error::ApiResult;
use crate::routes::build_router;
use crate::state::AppState;

/// Gemini when a key is configured, otherwise the disabled generator so
/// every reading takes the fallback path.
pub fn build_generator(config: &ApiConfig) -> ApiResult<Arc<dyn TextGenerator>> {
    match config.provider.api_key() {
        Some(api_key) => {
            let generator = GeminiGenerator::with_base_url(
                api_key,
                config.provider.base_url.clone(),
                config.generation.clone(),
            )?;
            tracing::info!(model = %config.generation.model, "Gemini generation enabled");
            Ok(Arc::new(generator))
        }
        None => {
            tracing::warn!("No Gemini API key configured; all readings will use fallback text");
            Ok(Arc::new(DisabledGenerator))
        }
    }
}

/// Orchestrator whose generation deadline fits inside the HTTP timeout.
pub fn build_orchestrator(
    generator: Arc<dyn TextGenerator>,
    config: &ApiConfig,
) -> ReadingOrchestrator {
    let budget = config.generation_budget();
    tracing::debug!(budget_ms = budget.as_millis() as u64, "Generation deadline");
    ReadingOrchestrator::new(generator).with_generation_timeout(budget)
}

pub async fn serve(config: ApiConfig) -> ApiResult<()> {
    let generator = build_generator(&config)?;
    let orchestrator = build_orchestrator(generator, &config);
    let state = AppState::new(orchestrator, config.debug);
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.http.bind_addr).await?;
    tracing::info!("🚀 Astro reading server started at http://{}", config.http.bind_addr);
    tracing::info!("🩺 Health check: GET /api/health");
    tracing::info!("🔮 Full reading: POST /result (form or JSON)");
    tracing::info!("✨ Condensed reading: POST /api/reading (JSON or form)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderConfig;

    #[test]
    fn test_generator_selection() {
        let mut config = ApiConfig::default();
        config.provider = ProviderConfig {
            api_key: None,
            ..ProviderConfig::default()
        };
        assert_eq!(build_generator(&config).unwrap().name(), "disabled");

        config.provider.api_key = Some("test-key".to_string());
        assert_eq!(build_generator(&config).unwrap().name(), "gemini");
    }

    #[test]
    fn test_orchestrator_uses_generation_budget() {
        let mut config = ApiConfig::default();
        config.http.timeout_secs = 10;

        let orchestrator = build_orchestrator(Arc::new(DisabledGenerator), &config);
        assert_eq!(orchestrator.generation_timeout(), config.generation_budget());
        assert!(orchestrator.generation_timeout() < std::time::Duration::from_secs(10));
    }
}
