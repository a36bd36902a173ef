//! Error handling - maps failures onto the two HTTP error classes.

use std::fmt::Display;

use actix_web::{HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError, http::StatusCode};
use blog_shared::MessageResponse;
use thiserror::Error;

/// Application-level error type rendered as `{"message": ...}`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed input or a write the store rejected.
    #[error("{0}")]
    BadRequest(String),

    /// Store or connectivity failure.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(err: impl Display) -> Self {
        AppError::BadRequest(err.to_string())
    }

    pub fn internal(err: impl Display) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::BadRequest(detail) => {
                tracing::warn!("Bad request: {}", detail);
                MessageResponse::new(detail.as_str())
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                MessageResponse::new("Internal server error")
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Turns body extraction failures into `AppError::BadRequest`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::bad_request(err).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
