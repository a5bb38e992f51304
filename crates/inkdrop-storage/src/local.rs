use crate::traits::{Storage, StorageError, StorageResult};
use async_trait::async_trait;
use inkdrop_core::CollisionPolicy;
use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::time::Instant;
use tokio::fs;
use tokio::io::AsyncRead;

/// Local filesystem storage implementation
#[derive(Clone, Debug)]
pub struct LocalStorage {
    base_path: PathBuf,
    base_url: String,
    collision_policy: CollisionPolicy,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// The directory is not touched here; it is created on the first upload.
    ///
    /// # Arguments
    /// * `base_path` - Directory receiving the files (e.g., "/srv/app/uploads/images")
    /// * `base_url` - Public URL prefix for stored files (e.g., "/uploads/images")
    /// * `collision_policy` - Behaviour when the target file already exists
    pub fn new(
        base_path: impl Into<PathBuf>,
        base_url: impl Into<String>,
        collision_policy: CollisionPolicy,
    ) -> Self {
        LocalStorage {
            base_path: base_path.into(),
            base_url: base_url.into(),
            collision_policy,
        }
    }

    /// Convert storage key to filesystem path.
    ///
    /// Keys are flat filenames; anything that could address another directory is refused.
    fn key_to_path(&self, storage_key: &str) -> StorageResult<PathBuf> {
        if storage_key.is_empty()
            || storage_key.contains("..")
            || storage_key.contains('/')
            || storage_key.contains('\\')
        {
            return Err(StorageError::InvalidKey(storage_key.to_string()));
        }

        Ok(self.base_path.join(storage_key))
    }

    /// Generate public URL for file
    fn generate_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), key)
    }

    /// Open the target according to the collision policy
    async fn create_target(&self, path: &Path, key: &str) -> StorageResult<fs::File> {
        let mut options = fs::OpenOptions::new();
        options.write(true);
        match self.collision_policy {
            CollisionPolicy::Overwrite => {
                options.create(true).truncate(true);
            }
            CollisionPolicy::Fail => {
                options.create_new(true);
            }
        }

        options.open(path).await.map_err(|e| {
            if e.kind() == io::ErrorKind::AlreadyExists {
                StorageError::AlreadyExists(key.to_string())
            } else {
                tracing::debug!(path = %path.display(), error = %e, "Failed to create file");
                StorageError::IoError(e)
            }
        })
    }

    /// Best-effort removal of a file left behind by a failed copy
    async fn remove_partial(path: &Path) {
        if let Err(e) = fs::remove_file(path).await {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to remove partially written file"
                );
            }
        }
    }
}

async fn copy_to_file(
    reader: &mut Pin<Box<dyn AsyncRead + Send + Unpin>>,
    file: &mut fs::File,
) -> io::Result<u64> {
    let bytes_copied = tokio::io::copy(reader, file).await?;
    file.sync_all().await?;
    Ok(bytes_copied)
}

#[async_trait]
impl Storage for LocalStorage {
    async fn upload_stream(
        &self,
        filename: &str,
        content_length: Option<u64>,
        mut reader: Pin<Box<dyn AsyncRead + Send + Unpin>>,
    ) -> StorageResult<(String, String)> {
        let key = filename.to_string();
        let path = self.key_to_path(&key)?;
        let start = Instant::now();

        // Idempotent, and tolerates a concurrent request creating it first
        if let Err(e) = fs::create_dir_all(&self.base_path).await {
            tracing::debug!(
                path = %self.base_path.display(),
                error = %e,
                "Failed to create upload directory"
            );
            return Err(e.into());
        }

        let mut file = self.create_target(&path, &key).await?;

        let bytes_copied = match copy_to_file(&mut reader, &mut file).await {
            Ok(n) => n,
            Err(e) => {
                drop(file);
                Self::remove_partial(&path).await;
                tracing::debug!(path = %path.display(), error = %e, "Failed to write file");
                return Err(e.into());
            }
        };

        if let Some(expected) = content_length {
            if bytes_copied != expected {
                drop(file);
                Self::remove_partial(&path).await;
                return Err(StorageError::UploadFailed(format!(
                    "Incomplete write for {}: {} of {} bytes",
                    key, bytes_copied, expected
                )));
            }
        }

        let url = self.generate_url(&key);

        tracing::info!(
            path = %path.display(),
            key = %key,
            size_bytes = bytes_copied,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage stream upload successful"
        );

        Ok((key, url))
    }
}
