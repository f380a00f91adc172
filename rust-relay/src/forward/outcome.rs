//! Result of handling one event, and its mapping to the caller-facing response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// What happened to an accepted (well-formed) event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForwardOutcome {
    /// The upstream answered with a 2xx status.
    Forwarded,
    /// The policy dropped the event; nothing was sent upstream.
    Suppressed(String),
    /// The upstream answered with a non-2xx status (3xx included).
    UpstreamError { status: StatusCode, detail: String },
    /// The outbound request never produced a response.
    TransportError(String),
}

impl ForwardOutcome {
    /// Whether the event reached the upstream and was accepted.
    pub fn is_forwarded(&self) -> bool {
        matches!(self, ForwardOutcome::Forwarded)
    }

    /// Plain-text body returned to the webhook sender.
    pub fn message(&self) -> String {
        match self {
            ForwardOutcome::Forwarded => "Forwarded".to_string(),
            ForwardOutcome::Suppressed(reason) => format!("Not forwarding: {}", reason),
            ForwardOutcome::UpstreamError { status, .. } => {
                format!("Failed to forward: {}", status.as_u16())
            }
            ForwardOutcome::TransportError(detail) => format!("Failed to forward: {}", detail),
        }
    }

    /// Status code returned to the webhook sender.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ForwardOutcome::Forwarded | ForwardOutcome::Suppressed(_) => StatusCode::OK,
            ForwardOutcome::UpstreamError { .. } | ForwardOutcome::TransportError(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

impl IntoResponse for ForwardOutcome {
    fn into_response(self) -> Response {
        (self.status_code(), self.message()).into_response()
    }
}
