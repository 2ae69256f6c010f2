//! Router layers built from configuration.

use axum::http::{HeaderName, HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::CorsLayer;

use crate::config::CorsConfig;

/// CORS layer; entries that do not parse are skipped with a warning.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| parse_or_warn("origin", origin, |s| s.parse::<HeaderValue>().ok()))
        .collect();

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|method| parse_or_warn("method", method, |s| Method::from_bytes(s.as_bytes()).ok()))
        .collect();

    let headers: Vec<HeaderName> = config
        .allowed_headers
        .iter()
        .filter_map(|header| parse_or_warn("header", header, |s| HeaderName::from_bytes(s.as_bytes()).ok()))
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
        .max_age(Duration::from_secs(config.max_age_secs))
}

fn parse_or_warn<T>(kind: &str, raw: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    let parsed = parse(raw);
    if parsed.is_none() {
        tracing::warn!(kind, value = raw, "Ignoring invalid CORS entry");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_entries_are_skipped() {
        let parsed = parse_or_warn("method", "NOT A METHOD", |s| Method::from_bytes(s.as_bytes()).ok());
        assert!(parsed.is_none());

        let parsed = parse_or_warn("method", "POST", |s| Method::from_bytes(s.as_bytes()).ok());
        assert_eq!(parsed, Some(Method::POST));
    }
}
