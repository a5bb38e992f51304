use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
};
use inkdrop_core::{AppError, UploadResponse};
use inkdrop_processing::{file_extension, generate_unique_filename};

use crate::constants::NO_FILE_SELECTED;
use crate::error::HttpAppError;
use crate::response::JsonEnvelope;
use crate::state::AppState;
use crate::utils::upload::{extract_image_part, PartLimits};

/// Upload image handler
///
/// Reads the `image` part of a multipart form, validates it, stores it under
/// a freshly generated name and returns the public URL of the stored file.
///
/// # Errors
/// - `AppError::InvalidInput` - Missing part, failed validation, or a malformed form
/// - `AppError::PayloadTooLarge` - Request exceeds the request size cap
/// - `AppError::Storage` - The file could not be written
#[utoipa::path(
    post,
    path = "/upload/image",
    tag = "images",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image uploaded successfully", body = UploadResponse),
        (status = 400, description = "Missing or invalid image", body = UploadResponse),
        (status = 413, description = "Request too large", body = UploadResponse),
        (status = 500, description = "Image could not be stored", body = UploadResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_image"))]
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<JsonEnvelope, HttpAppError> {
    let multipart = multipart?;
    let limits = PartLimits::from_config(&state.config);

    let part = extract_image_part(multipart, &limits)
        .await?
        .ok_or_else(|| AppError::InvalidInput(NO_FILE_SELECTED.to_string()))?;

    tracing::debug!(
        filename = %part.filename,
        content_type = %part.content_type,
        size_bytes = part.size,
        spooled = part.is_spooled(),
        "Received image part"
    );

    state
        .validator
        .validate_all(&part.filename, &part.content_type, part.size)?;

    if state.config.sniff_content() {
        state
            .validator
            .validate_signature(&part.content_type, part.head())?;
    }

    let unique_name = generate_unique_filename(file_extension(&part.filename));
    let original_filename = part.filename.clone();
    let size = part.size;

    let reader = part.into_reader()?;
    let (storage_key, image_url) = state
        .storage
        .upload_stream(&unique_name, Some(size), reader)
        .await?;

    tracing::info!(
        original_filename = %original_filename,
        storage_key = %storage_key,
        size_bytes = size,
        image_url = %image_url,
        "Image upload successful"
    );

    Ok(JsonEnvelope::uploaded(image_url))
}

/// CORS preflight for the upload route.
///
/// The CORS headers themselves are added by the response middleware.
#[utoipa::path(
    options,
    path = "/upload/image",
    tag = "images",
    responses((status = 200, description = "Preflight accepted, empty body"))
)]
pub async fn upload_image_preflight() -> StatusCode {
    StatusCode::OK
}
