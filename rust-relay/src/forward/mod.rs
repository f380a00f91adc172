//! Upstream forwarding.
//!
//! One accepted event becomes exactly one outbound request: same method,
//! filtered headers, re-encoded JSON body. No retries, no streaming.

pub mod headers;
pub mod outcome;

use std::time::Duration;

use axum::http::{HeaderMap, Method};
use reqwest::{redirect, Client};
use tracing::{error, info};
use url::Url;

use crate::event::EventEnvelope;

pub use headers::{build_forward_headers, should_forward, FORWARDED_HEADER_MARKERS};
pub use outcome::ForwardOutcome;

/// Relays events to a fixed upstream target.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct Forwarder {
    client: Client,
    target: Url,
}

impl Forwarder {
    /// Create a forwarder with its own HTTP client.
    ///
    /// The client applies `timeout` to the whole outbound exchange and never
    /// follows redirects, so a 3xx from the target is reported as-is.
    pub fn new(target: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self::with_client(client, target))
    }

    /// Create a forwarder around an existing client.
    pub fn with_client(client: Client, target: Url) -> Self {
        Self { client, target }
    }

    /// The upstream URL events are sent to.
    pub fn target(&self) -> &Url {
        &self.target
    }

    /// Send one event upstream and report what happened.
    pub async fn forward(
        &self,
        method: &Method,
        original_headers: &HeaderMap,
        envelope: &EventEnvelope,
    ) -> ForwardOutcome {
        info!(
            upstream = %self.target,
            event_type = %envelope.kind,
            "forward_starting"
        );

        let body = match envelope.to_body() {
            Ok(body) => body,
            Err(e) => {
                error!(error = %e, "forward_encode_failed");
                return ForwardOutcome::TransportError(e.to_string());
            }
        };

        let headers = build_forward_headers(original_headers);

        let result = self
            .client
            .request(method.clone(), self.target.clone())
            .headers(headers)
            .body(body)
            .send()
            .await;

        match result {
            Ok(resp) => {
                let status = resp.status();

                if status.is_success() {
                    info!(
                        upstream = %self.target,
                        status_code = status.as_u16(),
                        "forward_complete"
                    );
                    return ForwardOutcome::Forwarded;
                }

                let detail = status
                    .canonical_reason()
                    .unwrap_or("unrecognized status")
                    .to_string();

                error!(
                    upstream = %self.target,
                    status_code = status.as_u16(),
                    detail = %detail,
                    "forward_upstream_rejected"
                );

                ForwardOutcome::UpstreamError { status, detail }
            }
            Err(e) => {
                if e.is_timeout() {
                    error!(
                        upstream = %self.target,
                        error = %e,
                        "forward_transport_timeout"
                    );
                } else if e.is_connect() {
                    error!(
                        upstream = %self.target,
                        error = %e,
                        "forward_transport_connect_error"
                    );
                } else {
                    error!(
                        upstream = %self.target,
                        error = %e,
                        "forward_transport_failed"
                    );
                }

                ForwardOutcome::TransportError(e.to_string())
            }
        }
    }
}
