//! Upload route group.

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::post, Router};
use inkdrop_core::Config;

use crate::handlers::image_upload::{upload_image, upload_image_preflight};
use crate::state::AppState;

/// POST and OPTIONS on the upload route, capped at the request size limit
pub(super) fn upload_routes(config: &Config, state: Arc<AppState>) -> Router<()> {
    // The multipart reader reports the overflow, so the client still gets a JSON 413
    let request_limit = usize::try_from(config.max_request_size_bytes()).unwrap_or(usize::MAX);

    Router::new()
        .route(
            &config.upload_route(),
            post(upload_image).options(upload_image_preflight),
        )
        .layer(DefaultBodyLimit::max(request_limit))
        .with_state(state)
}
