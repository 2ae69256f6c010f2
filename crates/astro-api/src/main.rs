use anyhow::Context;
use astro_api::ApiConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the optional configuration file
const CONFIG_PATH_VAR: &str = "ASTRO_CONFIG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,astro_api=debug,astro_agents=debug")),
        )
        .init();

    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| "config/astro".to_string());
    let config = ApiConfig::load(&path)
        .with_context(|| format!("failed to load configuration from {}", path))?;

    astro_api::serve(config).await?;
    Ok(())
}
