/// Multipart field carrying the uploaded image
pub const IMAGE_FIELD: &str = "image";

/// Returned when the request has no `image` part
pub const NO_FILE_SELECTED: &str = "no image file selected";

/// Content type of every JSON response produced by the service
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

pub const BYTES_PER_MB: u64 = 1024 * 1024;
