//! Error handling for the vimgym API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use vimgym_core::CatalogError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Catalog(_) => (StatusCode::BAD_REQUEST, "catalog_error"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "io_error"),
            ApiError::Persistence(_) => (StatusCode::INTERNAL_SERVER_ERROR, "persistence_error"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
