use crate::infrastructure::config::AppConfig;
use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

/// CORS policy from `CORS_ALLOWED_ORIGINS`: a comma separated list, or empty / `*` for any origin.
pub fn cors_layer(config: &AppConfig) -> anyhow::Result<CorsLayer> {
    let allowed_origins = config.cors_allowed_origins.trim();

    if allowed_origins.is_empty() || allowed_origins == "*" {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(|s| s.trim().parse())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}
