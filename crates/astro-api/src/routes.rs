//! Route table.

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers;
use crate::middleware::cors_layer;
use crate::state::AppState;

pub fn build_router(state: AppState, config: &ApiConfig) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/result", post(handlers::full_reading))
        .route("/api/reading", post(handlers::api_reading))
        .layer(DefaultBodyLimit::max(config.http.max_body_size))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.http.timeout_secs),
        ))
        .layer(cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
