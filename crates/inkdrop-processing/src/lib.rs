//! Inkdrop Processing Library
//!
//! Pure, side-effect-free pieces of the upload pipeline: image validation,
//! unique naming, content-disposition parsing, and signature sniffing.

pub mod disposition;
pub mod naming;
pub mod sniff;
pub mod validator;

pub use disposition::{submitted_file_name, UNKNOWN_FILE_NAME};
pub use naming::{file_extension, generate_unique_filename};
pub use sniff::{detect_image_type, SNIFF_LEN};
pub use validator::{ImageValidator, ValidationError};
