use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{header::InvalidHeaderValue, HeaderMap, HeaderValue};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

const ALLOWED_METHODS: &str = "POST, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// CORS headers configuration
#[derive(Clone, Debug)]
pub struct CorsHeadersConfig {
    allow_origin: HeaderValue,
}

impl CorsHeadersConfig {
    pub fn new(allow_origin: &str) -> Result<Self, InvalidHeaderValue> {
        Ok(Self {
            allow_origin: HeaderValue::from_str(allow_origin)?,
        })
    }

    /// Set the three CORS headers, replacing any value already present
    pub fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, self.allow_origin.clone());
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );
    }
}

/// CORS headers middleware
/// Adds the CORS headers to every response, including errors and preflight replies
pub async fn cors_headers_middleware(
    State(config): State<Arc<CorsHeadersConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    config.apply(response.headers_mut());
    response
}
