use inkdrop_core::Config;

use crate::naming::file_extension;
use crate::sniff::detect_image_type;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Reasons an upload is rejected. The `Display` text is the exact message
/// returned to the editor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("file too large, max {max_mb}MB")]
    FileTooLarge { size: u64, max_mb: u64 },

    #[error("empty file not allowed")]
    EmptyFile,

    #[error("unsupported file format, only JPG/PNG/GIF/WEBP allowed")]
    UnsupportedExtension { extension: String },

    #[error("unsupported file format, only images allowed")]
    UnsupportedContentType { content_type: String },

    #[error("file content does not match declared image type")]
    SignatureMismatch { content_type: String },
}

/// Image upload validator
///
/// Checks run in a fixed order and only the first failure is reported:
/// size limit, emptiness, extension, then declared content type.
#[derive(Debug, Clone)]
pub struct ImageValidator {
    max_file_size: u64,
    allowed_extensions: Vec<String>,
    allowed_content_types: Vec<String>,
}

impl ImageValidator {
    /// `allowed_extensions` include the leading dot (".png").
    pub fn new(
        max_file_size: u64,
        allowed_extensions: Vec<String>,
        allowed_content_types: Vec<String>,
    ) -> Self {
        Self {
            max_file_size,
            allowed_extensions,
            allowed_content_types,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.max_file_size_bytes(),
            config.allowed_extensions().to_vec(),
            config.allowed_content_types().to_vec(),
        )
    }

    /// Validate file size
    pub fn validate_file_size(&self, size: u64) -> Result<(), ValidationError> {
        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                size,
                max_mb: self.max_file_size / BYTES_PER_MB,
            });
        }

        if size == 0 {
            return Err(ValidationError::EmptyFile);
        }

        Ok(())
    }

    /// Validate the extension taken from the last '.' of the filename
    pub fn validate_extension(&self, filename: &str) -> Result<(), ValidationError> {
        let extension = file_extension(filename);

        if !self
            .allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(extension))
        {
            return Err(ValidationError::UnsupportedExtension {
                extension: extension.to_string(),
            });
        }

        Ok(())
    }

    /// Validate the client-declared content type.
    ///
    /// The value is compared whole; parameters such as `; charset=` are not stripped.
    pub fn validate_content_type(&self, content_type: &str) -> Result<(), ValidationError> {
        let declared = content_type.trim();

        if !self
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(declared))
        {
            return Err(ValidationError::UnsupportedContentType {
                content_type: content_type.to_string(),
            });
        }

        Ok(())
    }

    /// Run all checks in order
    pub fn validate_all(
        &self,
        filename: &str,
        content_type: &str,
        size: u64,
    ) -> Result<(), ValidationError> {
        self.validate_file_size(size)?;
        self.validate_extension(filename)?;
        self.validate_content_type(content_type)?;
        Ok(())
    }

    /// Verify that the leading bytes carry the signature of the declared type.
    ///
    /// Only meaningful after `validate_all` has accepted the content type.
    pub fn validate_signature(
        &self,
        content_type: &str,
        head: &[u8],
    ) -> Result<(), ValidationError> {
        let declared = content_type.trim();
        match detect_image_type(head) {
            Some(detected) if detected.eq_ignore_ascii_case(declared) => Ok(()),
            detected => {
                tracing::debug!(
                    declared = %declared,
                    detected = ?detected,
                    "Image signature does not match declared content type"
                );
                Err(ValidationError::SignatureMismatch {
                    content_type: content_type.to_string(),
                })
            }
        }
    }
}
