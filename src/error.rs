// HTTP API error types
use axum::{http::StatusCode, response::IntoResponse};

use crate::services::TrackServiceError;

/// HTTP-facing error: a status code plus the plain-text message the client
/// receives. Error bodies on this API are bare strings, not a structured
/// schema.
#[derive(Debug)]
pub enum ApiError {
    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::NotFound(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }
}

// Every domain error answers 404 with its display text, the create-conflict
// case included: the external contract uses 404 there, not 409.
impl From<TrackServiceError> for ApiError {
    fn from(err: TrackServiceError) -> Self {
        ApiError::not_found(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let message = match self {
            ApiError::NotFound(msg) | ApiError::InternalServerError(msg) => msg,
        };
        (status, message).into_response()
    }
}
