//! Unified error types for the portfolio site
//!
//! This module defines error types for each layer:
//! - `PublishingError`: publishing API client errors
//! - `CatalogError`: project table loading errors
//! - `AppError`: HTTP layer errors (rendered as JSON responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Publishing API client errors
///
/// The blog list treats every variant the same way: log it and show no posts.
#[derive(Debug, Error)]
pub enum PublishingError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Response is missing {0}")]
    MissingData(String),
}

/// Errors loading a project table from disk
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unable to read project table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid project table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    details: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad request", msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", msg),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
