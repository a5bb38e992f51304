use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message returned with every successful upload
pub const UPLOAD_SUCCEEDED: &str = "upload succeeded";

/// JSON envelope returned by the upload endpoint on every path.
///
/// `imageUrl` is only present on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "/uploads/images/1729238400000_3f2b8c1d9e7a4b6c8d0e1f2a3b4c5d6e.png")]
    pub image_url: Option<String>,
    pub message: String,
}

impl UploadResponse {
    pub fn success(image_url: impl Into<String>) -> Self {
        Self {
            success: true,
            image_url: Some(image_url.into()),
            message: UPLOAD_SUCCEEDED.to_string(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            image_url: None,
            message: message.into(),
        }
    }
}
