//! # HTTP API Errors
//!
//! Maps catalog and query failures onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::query::QueryError;

/// Result type for HTTP handlers
pub type RestResult<T> = Result<T, RestError>;

/// HTTP API errors
#[derive(Debug, Clone, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Path id is not a positive integer
    #[error("Invalid pokemon id: {0}")]
    InvalidPathId(String),

    /// Request body could not be decoded
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    // ==================
    // Subsystem Errors
    // ==================
    /// Catalog error
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// Search error
    #[error("{0}")]
    Query(#[from] QueryError),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            RestError::InvalidPathId(_) => StatusCode::BAD_REQUEST,
            RestError::InvalidBody(_) => StatusCode::BAD_REQUEST,

            RestError::Catalog(err) => match err {
                CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
                CatalogError::AlreadyExists(_) => StatusCode::BAD_REQUEST,
                CatalogError::InvalidRecord(_) => StatusCode::BAD_REQUEST,
                CatalogError::LoadFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },

            RestError::Query(err) => match err {
                QueryError::NoMatch => StatusCode::NOT_FOUND,
                QueryError::InvalidParam(_) => StatusCode::BAD_REQUEST,
            },
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<RestError> for ErrorResponse {
    fn from(err: RestError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
