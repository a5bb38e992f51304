//! Inkdrop API
//!
//! HTTP surface of the image upload service: the `POST /upload/image`
//! endpoint used by rich-text editors, its CORS preflight, a liveness check,
//! the OpenAPI document, and static serving of stored images.

pub mod api_doc;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod setup;
pub mod state;
pub mod telemetry;
pub mod utils;
