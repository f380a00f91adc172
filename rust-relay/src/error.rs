//! Request-level errors.
//!
//! Each variant ends the request before anything is sent upstream and maps
//! to a fixed status code and plain-text body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Reasons an inbound request is rejected outright.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The request method is not POST.
    #[error("Not post")]
    MethodNotAllowed,

    /// The `X-GitHub-Event` header is absent or empty.
    #[error("No github")]
    MissingEventType,

    /// Signature verification is enabled and the request failed it.
    #[error("Invalid signature")]
    InvalidSignature,

    /// The body is not a JSON document.
    #[error("Invalid JSON body")]
    InvalidBody(#[from] serde_json::Error),
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::MissingEventType | RelayError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RelayError::InvalidSignature => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
