//! Test helpers: build AppState and router for integration tests.
//!
//! Every test app stores its uploads under its own temporary application root.

#![allow(dead_code)]

pub mod fixtures;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::{TestResponse, TestServer};
use inkdrop_api::setup::routes;
use inkdrop_api::state::AppState;
use inkdrop_core::{Config, UploadConfig};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub const UPLOAD_ROUTE: &str = "/upload/image";

/// Test application: server, configuration, and owned resources.
pub struct TestApp {
    pub server: TestServer,
    pub config: Config,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.config.upload_path()
    }

    /// Names of the files in the upload directory, sorted; empty if it does not exist yet
    pub fn stored_files(&self) -> Vec<String> {
        let mut names: Vec<String> = match std::fs::read_dir(self.upload_dir()) {
            Ok(entries) => entries
                .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
                .collect(),
            Err(_) => Vec::new(),
        };
        names.sort();
        names
    }

    pub fn read_stored(&self, name: &str) -> Vec<u8> {
        std::fs::read(self.upload_dir().join(name)).expect("stored file should be readable")
    }
}

/// Default configuration rooted in a fresh temporary directory
pub fn setup_test_app() -> TestApp {
    setup_test_app_with(&[])
}

/// Like `setup_test_app`, with configuration variables overridden
pub fn setup_test_app_with(overrides: &[(&str, &str)]) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let app_root = temp_dir.path().to_string_lossy().into_owned();
    build_test_app(temp_dir, &app_root, overrides)
}

/// App whose root is a regular file, so the upload directory cannot be created
pub fn setup_unwritable_test_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let blocker = temp_dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"file in the way").expect("Failed to create blocker file");
    let app_root = blocker.to_string_lossy().into_owned();
    build_test_app(temp_dir, &app_root, &[])
}

fn build_test_app(temp_dir: TempDir, app_root: &str, overrides: &[(&str, &str)]) -> TestApp {
    let mut vars: HashMap<String, String> = HashMap::new();
    vars.insert("APP_ROOT".to_string(), app_root.to_string());
    for (key, value) in overrides {
        vars.insert(key.to_string(), value.to_string());
    }

    let upload_config =
        UploadConfig::from_lookup(|key| vars.get(key).cloned()).expect("Invalid test config");
    let config = Config(Box::new(upload_config));
    config.validate().expect("Test config failed validation");

    let storage = inkdrop_storage::create_storage(&config);
    let state = Arc::new(AppState::new(config.clone(), storage));
    let app = routes::setup_routes(&config, state).expect("Failed to build router");

    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        config,
        _temp_dir: temp_dir,
    }
}

/// File part as an editor would send it
pub fn image_part(data: Vec<u8>, file_name: &str, mime_type: &str) -> Part {
    Part::bytes(bytes::Bytes::from(data))
        .file_name(file_name)
        .mime_type(mime_type)
}

/// Form with a single `image` part
pub fn image_form(data: Vec<u8>, file_name: &str, mime_type: &str) -> MultipartForm {
    MultipartForm::new().add_part("image", image_part(data, file_name, mime_type))
}

pub const RAW_BOUNDARY: &str = "inkdrop-test-boundary";

/// Hand-built multipart body with a single `image` part.
///
/// The filename bytes go into the part header untouched, the way browsers send
/// non-ASCII names.
pub fn raw_image_body(file_name: &str, mime_type: &str, data: &[u8]) -> bytes::Bytes {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{RAW_BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"image\"; filename=\"{file_name}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {mime_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{RAW_BOUNDARY}--\r\n").as_bytes());
    bytes::Bytes::from(body)
}

pub fn raw_multipart_content_type() -> String {
    format!("multipart/form-data; boundary={RAW_BOUNDARY}")
}

/// Assert the three CORS headers every response carries
pub fn assert_cors_headers(response: &TestResponse) {
    assert_eq!(response.header("access-control-allow-origin"), "*");
    assert_eq!(
        response.header("access-control-allow-methods"),
        "POST, OPTIONS"
    );
    assert_eq!(
        response.header("access-control-allow-headers"),
        "Content-Type, Authorization"
    );
}

/// Last path segment of an image URL
pub fn stored_name(image_url: &str) -> &str {
    image_url.rsplit('/').next().unwrap_or(image_url)
}

/// Assert `name` looks like `<millis>_<32 hex><extension>`
pub fn assert_generated_name(name: &str, extension: &str) {
    let stem = name
        .strip_suffix(extension)
        .unwrap_or_else(|| panic!("{name} should end with {extension}"));
    let (millis, hex) = stem
        .split_once('_')
        .unwrap_or_else(|| panic!("{name} should contain '_'"));

    assert!(
        millis.len() >= 13 && millis.chars().all(|c| c.is_ascii_digit()),
        "{name}: timestamp part should be epoch milliseconds"
    );
    assert_eq!(hex.len(), 32, "{name}: uuid part should be 32 chars");
    assert!(
        hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
        "{name}: uuid part should be lowercase hex"
    );
}
