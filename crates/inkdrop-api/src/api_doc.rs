//! OpenAPI documentation.
//! Handler annotations use root-relative paths; the configured context path
//! is prepended when the document is served.

use utoipa::OpenApi;

use crate::handlers;
use inkdrop_core::models;

/// Prefix every path key with the deployment's context path
fn prefix_openapi_paths(spec: &mut utoipa::openapi::OpenApi, context_path: &str) {
    if context_path.is_empty() {
        return;
    }
    let path_map = std::mem::take(&mut spec.paths.paths);
    for (key, item) in path_map {
        spec.paths.paths.insert(format!("{}{}", context_path, key), item);
    }
}

/// Returns the OpenAPI spec with paths rooted at `context_path`.
pub fn get_openapi_spec(context_path: &str) -> utoipa::openapi::OpenApi {
    let mut spec = ApiDoc::openapi();
    prefix_openapi_paths(&mut spec, context_path);
    spec
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inkdrop API",
        version = "0.1.0",
        description = "Image upload endpoint for rich-text editors. Accepts a multipart form with an `image` part and returns the public URL of the stored file."
    ),
    paths(
        handlers::image_upload::upload_image,
        handlers::image_upload::upload_image_preflight,
        crate::setup::routes::health::liveness_check,
    ),
    components(schemas(models::UploadResponse)),
    tags(
        (name = "images", description = "Image upload"),
        (name = "health", description = "Liveness check")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_lists_upload_route() {
        let spec = get_openapi_spec("");
        assert!(spec.paths.paths.contains_key("/upload/image"));
        assert!(spec.paths.paths.contains_key("/health"));
    }

    #[test]
    fn test_context_path_prefixes_routes() {
        let spec = get_openapi_spec("/editor");
        assert!(spec.paths.paths.contains_key("/editor/upload/image"));
        assert!(!spec.paths.paths.contains_key("/upload/image"));
    }
}
