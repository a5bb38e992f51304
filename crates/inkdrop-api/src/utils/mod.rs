pub mod upload;

pub use upload::{extract_image_part, PartLimits, UploadedPart};
