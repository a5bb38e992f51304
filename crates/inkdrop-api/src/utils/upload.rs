//! Multipart extraction for the image upload endpoint
//!
//! The `image` part is buffered in memory up to the spill threshold and
//! continues in an anonymous temporary file past it. Reading stops as soon as
//! the part grows beyond the per-file limit; the observed size is kept so the
//! validator can reject it.

use std::io::Cursor;
use std::pin::Pin;

use axum::extract::multipart::{Field, Multipart};
use axum::http::header::CONTENT_DISPOSITION;
use bytes::{Bytes, BytesMut};
use inkdrop_core::{AppError, Config};
use inkdrop_processing::{submitted_file_name, SNIFF_LEN};
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncSeekExt, AsyncWriteExt};

use crate::constants::IMAGE_FIELD;
use crate::error::multipart_error;

/// Size limits applied while reading a part
#[derive(Debug, Clone, Copy)]
pub struct PartLimits {
    pub max_file_size: u64,
    pub max_request_size: u64,
    pub file_size_threshold: u64,
}

impl PartLimits {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_file_size: config.max_file_size_bytes(),
            max_request_size: config.max_request_size_bytes(),
            file_size_threshold: config.file_size_threshold_bytes(),
        }
    }
}

enum PartBody {
    Memory(Bytes),
    Spooled(File),
    /// Not retained because the part exceeded the per-file limit
    Discarded,
}

/// The `image` part of an upload request
pub struct UploadedPart {
    /// Client-supplied filename, "unknown" when absent
    pub filename: String,
    /// Client-declared content type, empty when absent
    pub content_type: String,
    /// Bytes read; past the per-file limit this is a lower bound
    pub size: u64,
    head: Vec<u8>,
    body: PartBody,
}

impl UploadedPart {
    /// Leading bytes of the content, at most `SNIFF_LEN`
    pub fn head(&self) -> &[u8] {
        &self.head
    }

    pub fn is_spooled(&self) -> bool {
        matches!(self.body, PartBody::Spooled(_))
    }

    /// Consume the part into a reader positioned at its first byte
    pub fn into_reader(self) -> Result<Pin<Box<dyn AsyncRead + Send + Unpin>>, AppError> {
        match self.body {
            PartBody::Memory(bytes) => Ok(Box::pin(Cursor::new(bytes))),
            PartBody::Spooled(file) => Ok(Box::pin(file)),
            PartBody::Discarded => Err(AppError::Internal(
                "oversized part content was not retained".to_string(),
            )),
        }
    }
}

/// Find the first part named `image` and buffer it.
///
/// Parts before it are skipped; parts after it are never read. Returns `None`
/// when the form has no `image` part.
pub async fn extract_image_part(
    mut multipart: Multipart,
    limits: &PartLimits,
) -> Result<Option<UploadedPart>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limits.max_request_size))?
    {
        if field.name() == Some(IMAGE_FIELD) {
            return read_part(field, limits).await.map(Some);
        }
    }

    Ok(None)
}

async fn read_part(mut field: Field<'_>, limits: &PartLimits) -> Result<UploadedPart, AppError> {
    // Browsers send UTF-8 filenames as raw header bytes; only the extension matters
    let disposition = field
        .headers()
        .get(CONTENT_DISPOSITION)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());
    let filename = submitted_file_name(disposition.as_deref());
    let content_type = field.content_type().unwrap_or_default().to_string();

    let mut spool = Spool::new(limits.file_size_threshold);
    let mut size: u64 = 0;

    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| multipart_error(e, limits.max_request_size))?
    {
        size += chunk.len() as u64;
        if size > limits.max_file_size {
            tracing::debug!(
                filename = %filename,
                size_bytes = size,
                max_bytes = limits.max_file_size,
                "Image part exceeds size limit, stopped reading"
            );
            return Ok(UploadedPart {
                filename,
                content_type,
                size,
                head: spool.head,
                body: PartBody::Discarded,
            });
        }
        spool.write(chunk).await?;
    }

    let head = std::mem::take(&mut spool.head);
    let body = spool.finish().await?;

    Ok(UploadedPart {
        filename,
        content_type,
        size,
        head,
        body,
    })
}

/// Memory buffer that moves to a temporary file once it outgrows `threshold`
struct Spool {
    threshold: u64,
    memory: BytesMut,
    file: Option<File>,
    head: Vec<u8>,
}

impl Spool {
    fn new(threshold: u64) -> Self {
        Self {
            threshold,
            memory: BytesMut::new(),
            file: None,
            head: Vec::with_capacity(SNIFF_LEN),
        }
    }

    async fn write(&mut self, chunk: Bytes) -> Result<(), AppError> {
        if self.head.len() < SNIFF_LEN {
            let take = (SNIFF_LEN - self.head.len()).min(chunk.len());
            self.head.extend_from_slice(&chunk[..take]);
        }

        if let Some(file) = self.file.as_mut() {
            file.write_all(&chunk).await?;
            return Ok(());
        }

        if (self.memory.len() + chunk.len()) as u64 > self.threshold {
            let mut file = spill_file().await?;
            file.write_all(&self.memory).await?;
            file.write_all(&chunk).await?;
            tracing::debug!(
                threshold_bytes = self.threshold,
                "Image part spilled to temporary file"
            );
            self.memory = BytesMut::new();
            self.file = Some(file);
        } else {
            self.memory.extend_from_slice(&chunk);
        }

        Ok(())
    }

    async fn finish(self) -> Result<PartBody, AppError> {
        match self.file {
            Some(mut file) => {
                file.flush().await?;
                file.rewind().await?;
                Ok(PartBody::Spooled(file))
            }
            None => Ok(PartBody::Memory(self.memory.freeze())),
        }
    }
}

/// Anonymous temporary file; removed by the OS once the handle is dropped
async fn spill_file() -> Result<File, AppError> {
    let file = tokio::task::spawn_blocking(tempfile::tempfile)
        .await
        .map_err(|e| AppError::Internal(format!("temporary file task failed: {}", e)))??;
    Ok(File::from_std(file))
}
