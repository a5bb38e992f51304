use std::any::Any;

use axum::response::{IntoResponse, Response};
use inkdrop_core::AppError;

use crate::error::HttpAppError;

/// Render a handler panic as the standard JSON failure envelope (500)
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unexpected panic".to_string()
    };

    HttpAppError(AppError::Internal(detail)).into_response()
}
