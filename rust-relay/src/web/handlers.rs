//! Relay endpoint handlers.
//!
//! The relay handler:
//! 1. Rejects anything that is not a POST with an `X-GitHub-Event` header
//! 2. Verifies the signature (if a secret is configured)
//! 3. Parses the body and asks the policy whether to drop the event
//! 4. Forwards accepted events to the configured target
//!
//! Every request is handled on its own; the only shared state is the
//! read-only config and the outbound client pool.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::classify::classify;
use crate::error::RelayError;
use crate::event::{EventEnvelope, EVENT_TYPE_HEADER};
use crate::forward::{ForwardOutcome, Forwarder};
use crate::web::signature::{
    is_signature_verification_enabled, verify_github_signature, SIGNATURE_HEADER,
};
use crate::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub forwarder: Forwarder,
}

impl AppState {
    /// Build the state, including the outbound HTTP client.
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let forwarder = Forwarder::new(config.target.clone(), config.request_timeout())?;
        Ok(Self {
            config: Arc::new(config),
            forwarder,
        })
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Mock Target
// =============================================================================

/// Stand-in upstream; the default `TARGET` points here.
pub async fn mock_target() -> &'static str {
    "Mock"
}

// =============================================================================
// Relay
// =============================================================================

/// Relay endpoint, mounted on every path not claimed by another route.
pub async fn relay_webhook(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    match handle_event(&state, &method, &headers, &body).await {
        Ok(outcome) => outcome.into_response(),
        Err(e) => e.into_response(),
    }
}

/// Check the fixed preconditions and return the event type label.
pub fn validate_request<'a>(
    method: &Method,
    headers: &'a HeaderMap,
) -> Result<&'a str, RelayError> {
    if *method != Method::POST {
        warn!(method = %method, "relay_method_not_allowed");
        return Err(RelayError::MethodNotAllowed);
    }

    match headers
        .get(EVENT_TYPE_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
    {
        Some(event_type) => Ok(event_type),
        None => {
            warn!("relay_missing_event_type");
            Err(RelayError::MissingEventType)
        }
    }
}

async fn handle_event(
    state: &AppState,
    method: &Method,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<ForwardOutcome, RelayError> {
    let event_type = validate_request(method, headers)?;

    info!(
        event_type = %event_type,
        body_length = body.len(),
        "relay_incoming"
    );

    if is_signature_verification_enabled(&state.config.webhook_secret) {
        let secret = state.config.webhook_secret.as_deref().unwrap_or_default();
        let signature = headers
            .get(SIGNATURE_HEADER)
            .and_then(|v| v.to_str().ok());

        match signature {
            Some(signature) if verify_github_signature(secret, body, signature) => {}
            Some(_) => {
                warn!(event_type = %event_type, "relay_signature_invalid");
                return Err(RelayError::InvalidSignature);
            }
            None => {
                warn!(event_type = %event_type, "relay_signature_missing");
                return Err(RelayError::InvalidSignature);
            }
        }
    }

    let envelope = EventEnvelope::parse(event_type, body).map_err(|e| {
        warn!(event_type = %event_type, error = %e, "relay_invalid_body");
        RelayError::from(e)
    })?;

    if let Some(reason) = classify(&envelope) {
        info!(
            event_type = %event_type,
            sender = %envelope.sender.login,
            reason = %reason,
            "relay_suppressed"
        );
        return Ok(ForwardOutcome::Suppressed(reason));
    }

    Ok(state.forwarder.forward(method, headers, &envelope).await)
}
