//! Test helpers: a local upstream that records what the relay sends it.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{HeaderMap, Method, StatusCode},
    Router,
};
use tokio::net::TcpListener;
use url::Url;

/// One request as seen by the mock upstream.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

#[derive(Clone)]
struct UpstreamState {
    status: StatusCode,
    delay: Duration,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Handle to a running mock upstream.
pub struct MockUpstream {
    pub url: Url,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockUpstream {
    /// Start an upstream answering every request with `status`.
    pub async fn start(status: StatusCode) -> Self {
        Self::start_with_delay(status, Duration::ZERO).await
    }

    /// Start an upstream that waits `delay` before answering.
    pub async fn start_with_delay(status: StatusCode, delay: Duration) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = UpstreamState {
            status,
            delay,
            captured: captured.clone(),
        };

        let app = Router::new()
            .fallback(record)
            .layer(DefaultBodyLimit::disable())
            .with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self {
            url: Url::parse(&format!("http://{}/hook", addr)).unwrap(),
            captured,
        }
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

/// A URL nothing is listening on.
pub async fn unreachable_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{}/hook", addr)).unwrap()
}

async fn record(
    State(state): State<UpstreamState>,
    method: Method,
    uri: axum::http::Uri,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    state.captured.lock().unwrap().push(CapturedRequest {
        method,
        path: uri.path().to_string(),
        headers,
        body,
    });

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    state.status
}
