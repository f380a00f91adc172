//! Web server module for relaying inbound webhooks.
//!
//! Routes:
//! - `GET /health`: liveness probe (HEAD is relayed like any other method)
//! - `/mock-target`: stand-in upstream, any method
//! - everything else: the relay endpoint

pub mod handlers;
pub mod signature;

use axum::{
    extract::DefaultBodyLimit,
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;

pub use handlers::{health, mock_target, relay_webhook, validate_request, AppState, HealthResponse};
pub use signature::{is_signature_verification_enabled, verify_github_signature};

/// Largest inbound body accepted, matching GitHub's 25 MB delivery cap.
pub const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/health",
            get(health).head(relay_webhook).fallback(relay_webhook),
        )
        .route("/mock-target", any(mock_target))
        .fallback(relay_webhook)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
