pub mod upload;

pub use upload::{UploadResponse, UPLOAD_SUCCEEDED};
