//! Route configuration and setup.
//!
//! The upload route group lives in [upload](upload); liveness in [health](health).

pub mod health;
mod upload;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use inkdrop_core::Config;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::{catch_panic::CatchPanicLayer, services::ServeDir, trace::TraceLayer};

use crate::middleware::{cors_headers_middleware, panic_response, CorsHeadersConfig};
use crate::state::AppState;

/// Setup all application routes
///
/// Does not touch global state, so tests can build as many routers as they need.
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;

    let context_path = config.context_path().to_string();
    let mut app = Router::new()
        .route(&format!("{}/health", context_path), get(health::liveness_check))
        .route(
            &format!("{}/api/openapi.json", context_path),
            get(move || async move { Json(crate::api_doc::get_openapi_spec(&context_path)) }),
        )
        .merge(upload::upload_routes(config, state));

    if config.serve_uploads() {
        tracing::info!(
            route = %config.public_base_path(),
            dir = %config.upload_path().display(),
            "Serving stored images"
        );
        app = app.nest_service(&config.public_base_path(), ServeDir::new(config.upload_path()));
    }

    let http_concurrency_limit = config.http_concurrency_limit();
    tracing::info!(
        http_concurrency_limit,
        "HTTP concurrency limit layer enabled"
    );

    let app = app
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(ConcurrencyLimitLayer::new(http_concurrency_limit))
        .layer(axum::middleware::from_fn_with_state(
            cors,
            cors_headers_middleware,
        ));

    Ok(app)
}

fn setup_cors(config: &Config) -> Result<Arc<CorsHeadersConfig>, anyhow::Error> {
    let cors = CorsHeadersConfig::new(config.cors_allow_origin())
        .map_err(|e| anyhow::anyhow!("Invalid CORS_ALLOW_ORIGIN: {}", e))?;
    Ok(Arc::new(cors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_liveness_reports_alive() {
        let response = health::liveness_check().await.into_response();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }
}
