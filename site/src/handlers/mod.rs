//! HTTP handlers
//!
//! Axum request handlers for the site pages and the JSON API.

pub mod api;
pub mod pages;

use axum::http::Uri;

use crate::error::AppError;

pub use api::{list_blogs, list_projects};
pub use pages::{blogs, home, projects};

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
