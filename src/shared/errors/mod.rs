//! Error Types
//!
//! Client construction errors and their HTTP status code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Errors raised while building or using the database client
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("DATABASE_URL is not defined")]
    MissingConnectionString,

    #[error("Invalid database URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Database unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unavailable(_) | Self::Client(ClientError::Database(_)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Self::Client(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable(_) | Self::Client(ClientError::Database(_)) => "DATABASE_UNAVAILABLE",
            Self::Client(ClientError::MissingConnectionString) => "MISSING_DATABASE_URL",
            Self::Client(ClientError::InvalidUrl(_)) => "INVALID_DATABASE_URL",
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::UseCase(uc_error) => (
                uc_error.status_code(),
                uc_error.error_code().to_string(),
                uc_error.to_string(),
            ),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, code = %code, "Request failed");
        }

        let body = ErrorResponse {
            error: ErrorDetail { code, message },
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}
