//! JSON envelope rendering
//!
//! Every response body the upload endpoint produces, success or failure, is an
//! `UploadResponse` serialized with an explicit UTF-8 charset.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use inkdrop_core::UploadResponse;

use crate::constants::JSON_CONTENT_TYPE;

const FALLBACK_BODY: &str = r#"{"success":false,"message":"upload failed: response encoding error"}"#;

/// `UploadResponse` paired with the status it is sent with
#[derive(Debug, Clone)]
pub struct JsonEnvelope {
    status: StatusCode,
    body: UploadResponse,
}

impl JsonEnvelope {
    pub fn new(status: StatusCode, body: UploadResponse) -> Self {
        Self { status, body }
    }

    /// 200 with `success: true` and the public URL of the stored image
    pub fn uploaded(image_url: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, UploadResponse::success(image_url))
    }
}

impl IntoResponse for JsonEnvelope {
    fn into_response(self) -> Response {
        let content_type = [(
            header::CONTENT_TYPE,
            HeaderValue::from_static(JSON_CONTENT_TYPE),
        )];

        match serde_json::to_vec(&self.body) {
            Ok(bytes) => (self.status, content_type, bytes).into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize response envelope");
                (StatusCode::INTERNAL_SERVER_ERROR, content_type, FALLBACK_BODY).into_response()
            }
        }
    }
}
