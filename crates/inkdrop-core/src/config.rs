//! Configuration module
//!
//! Configuration is read from environment variables (a `.env` file is loaded
//! first when present) and validated once at startup.

use std::env;
use std::path::{Path, PathBuf};

use crate::storage_types::CollisionPolicy;

// Common constants
const SERVER_PORT: u16 = 8080;
const MAX_FILE_SIZE_MB: u64 = 10;
const MAX_REQUEST_SIZE_MB: u64 = 15;
const FILE_SIZE_THRESHOLD_KB: u64 = 1024;
const HTTP_CONCURRENCY_LIMIT: usize = 10_000;
const UPLOAD_DIR: &str = "uploads/images";
const ALLOWED_EXTENSIONS: &str = ".jpg,.jpeg,.png,.gif,.webp";
const ALLOWED_CONTENT_TYPES: &str = "image/jpeg,image/png,image/gif,image/webp";

/// Server-level settings
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub environment: String,
    pub cors_allow_origin: String,
    pub http_concurrency_limit: usize,
    /// Emit JSON log lines instead of the compact console format
    pub log_json: bool,
}

/// Image upload settings
#[derive(Clone, Debug)]
pub struct UploadConfig {
    pub base: BaseConfig,
    /// Deployment root; the upload directory is resolved beneath it
    pub app_root: PathBuf,
    /// Relative upload directory, also used as the public URL segment
    pub upload_dir: String,
    /// URL prefix the application is mounted under ("" or "/something")
    pub context_path: String,
    pub max_file_size_bytes: u64,
    pub max_request_size_bytes: u64,
    pub file_size_threshold_bytes: u64,
    pub allowed_extensions: Vec<String>,
    pub allowed_content_types: Vec<String>,
    pub collision_policy: CollisionPolicy,
    pub sniff_content: bool,
    pub serve_uploads: bool,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<UploadConfig>);

impl Config {
    fn as_upload(&self) -> &UploadConfig {
        &self.0
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let environment = self.as_upload().base.environment.to_lowercase();
        environment == "production" || environment == "prod"
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        let config = UploadConfig::from_lookup(|key| env::var(key).ok())?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.as_upload().validate()
    }

    pub fn server_port(&self) -> u16 {
        self.as_upload().base.server_port
    }

    pub fn environment(&self) -> &str {
        &self.as_upload().base.environment
    }

    pub fn cors_allow_origin(&self) -> &str {
        &self.as_upload().base.cors_allow_origin
    }

    pub fn http_concurrency_limit(&self) -> usize {
        self.as_upload().base.http_concurrency_limit
    }

    pub fn log_json(&self) -> bool {
        self.as_upload().base.log_json
    }

    pub fn app_root(&self) -> &Path {
        &self.as_upload().app_root
    }

    pub fn upload_dir(&self) -> &str {
        &self.as_upload().upload_dir
    }

    pub fn context_path(&self) -> &str {
        &self.as_upload().context_path
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        self.as_upload().max_file_size_bytes
    }

    pub fn max_request_size_bytes(&self) -> u64 {
        self.as_upload().max_request_size_bytes
    }

    pub fn file_size_threshold_bytes(&self) -> u64 {
        self.as_upload().file_size_threshold_bytes
    }

    pub fn allowed_extensions(&self) -> &[String] {
        &self.as_upload().allowed_extensions
    }

    pub fn allowed_content_types(&self) -> &[String] {
        &self.as_upload().allowed_content_types
    }

    pub fn collision_policy(&self) -> CollisionPolicy {
        self.as_upload().collision_policy
    }

    pub fn sniff_content(&self) -> bool {
        self.as_upload().sniff_content
    }

    pub fn serve_uploads(&self) -> bool {
        self.as_upload().serve_uploads
    }

    /// Filesystem directory that receives uploaded images
    pub fn upload_path(&self) -> PathBuf {
        self.app_root().join(self.upload_dir())
    }

    /// Public URL prefix for stored images: `<context-path>/<upload-dir>`
    pub fn public_base_path(&self) -> String {
        format!("{}/{}", self.context_path(), self.upload_dir())
    }

    /// Route of the upload endpoint: `<context-path>/upload/image`
    pub fn upload_route(&self) -> String {
        format!("{}/upload/image", self.context_path())
    }
}

impl UploadConfig {
    /// Build the configuration from a key lookup (the process environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let base = BaseConfig {
            server_port: lookup("PORT")
                .unwrap_or_else(|| SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            environment,
            cors_allow_origin: lookup("CORS_ALLOW_ORIGIN")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "*".to_string()),
            http_concurrency_limit: lookup("HTTP_CONCURRENCY_LIMIT")
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(HTTP_CONCURRENCY_LIMIT)
                .max(1),
            log_json: lookup("LOG_FORMAT")
                .map(|s| s.trim().eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        };

        let max_file_size_mb = lookup("MAX_FILE_SIZE_MB")
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(MAX_FILE_SIZE_MB);

        let max_request_size_mb = lookup("MAX_REQUEST_SIZE_MB")
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(MAX_REQUEST_SIZE_MB);

        let file_size_threshold_kb = lookup("FILE_SIZE_THRESHOLD_KB")
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(FILE_SIZE_THRESHOLD_KB);

        let collision_policy = match lookup("NAME_COLLISION_POLICY") {
            Some(value) => value.parse()?,
            None => CollisionPolicy::default(),
        };

        Ok(UploadConfig {
            base,
            app_root: PathBuf::from(lookup("APP_ROOT").unwrap_or_else(|| ".".to_string())),
            upload_dir: lookup("UPLOAD_DIR")
                .map(|s| s.trim().trim_matches('/').to_string())
                .unwrap_or_else(|| UPLOAD_DIR.to_string()),
            context_path: lookup("CONTEXT_PATH")
                .map(|s| s.trim().trim_end_matches('/').to_string())
                .unwrap_or_default(),
            max_file_size_bytes: max_file_size_mb * 1024 * 1024,
            max_request_size_bytes: max_request_size_mb * 1024 * 1024,
            file_size_threshold_bytes: file_size_threshold_kb * 1024,
            allowed_extensions: split_list(
                &lookup("ALLOWED_EXTENSIONS").unwrap_or_else(|| ALLOWED_EXTENSIONS.to_string()),
            )
            .into_iter()
            .map(|ext| {
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{}", ext)
                }
            })
            .collect(),
            allowed_content_types: split_list(
                &lookup("ALLOWED_CONTENT_TYPES")
                    .unwrap_or_else(|| ALLOWED_CONTENT_TYPES.to_string()),
            ),
            collision_policy,
            sniff_content: parse_bool(lookup("SNIFF_CONTENT"), false),
            serve_uploads: parse_bool(lookup("SERVE_UPLOADS"), true),
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.max_file_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_FILE_SIZE_MB must be greater than 0"));
        }

        if self.max_request_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_REQUEST_SIZE_MB must be greater than 0"));
        }

        if self.max_file_size_bytes > self.max_request_size_bytes {
            return Err(anyhow::anyhow!(
                "MAX_FILE_SIZE_MB cannot exceed MAX_REQUEST_SIZE_MB"
            ));
        }

        if self.file_size_threshold_bytes > self.max_file_size_bytes {
            return Err(anyhow::anyhow!(
                "FILE_SIZE_THRESHOLD_KB cannot exceed MAX_FILE_SIZE_MB"
            ));
        }

        if self.upload_dir.is_empty()
            || self.upload_dir.split('/').any(|segment| segment == "..")
            || Path::new(&self.upload_dir).is_absolute()
        {
            return Err(anyhow::anyhow!(
                "UPLOAD_DIR must be a relative path without '..' segments"
            ));
        }

        if !self.context_path.is_empty() && !self.context_path.starts_with('/') {
            return Err(anyhow::anyhow!(
                "CONTEXT_PATH must be empty or start with '/'"
            ));
        }

        if self.allowed_extensions.is_empty() || self.allowed_content_types.is_empty() {
            return Err(anyhow::anyhow!(
                "ALLOWED_EXTENSIONS and ALLOWED_CONTENT_TYPES cannot be empty"
            ));
        }

        Ok(())
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_bool(value: Option<String>, default: bool) -> bool {
    value
        .map(|s| s.trim().to_lowercase())
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
