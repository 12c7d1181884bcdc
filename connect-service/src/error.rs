//! Error types and HTTP response conversion
//!
//! Every failure a handler can produce is an [`Error`]. The response carries the
//! status code for the error class and a plain-text body with the reason, so a
//! 422 from the user endpoint reads exactly `user_id is required`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::ValidationError;
use crate::services::{calendar::CalendarError, imaging::ImagingError};

/// Result type alias using the service error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the service
///
/// Large error variants are boxed to reduce stack size
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unreadable body, malformed payload or unusable upload (400)
    #[error("{0}")]
    BadRequest(String),

    /// Well-formed request whose content fails validation (422)
    #[error("{0}")]
    Unprocessable(String),

    /// Internal server error
    #[error("{0}")]
    Internal(String),
}

impl Error {
    /// HTTP status for this error class
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Config(_) | Error::Io(_) | Error::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        // Don't leak configuration or filesystem details to callers
        let body = match self {
            Error::Config(_) | Error::Io(_) => "internal server error".to_string(),
            Error::BadRequest(msg) | Error::Unprocessable(msg) | Error::Internal(msg) => msg,
        };

        (status, body).into_response()
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Unprocessable(err.to_string())
    }
}

impl From<CalendarError> for Error {
    fn from(err: CalendarError) -> Self {
        Error::Unprocessable(err.to_string())
    }
}

impl From<ImagingError> for Error {
    fn from(err: ImagingError) -> Self {
        Error::BadRequest(err.to_string())
    }
}
