//! Outbound header selection.

use axum::http::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

/// Substrings that mark an inbound header as worth relaying.
///
/// Matched anywhere in the lowercase header name, so `x-github-delivery`
/// and `x-my-authorization-token` both pass.
pub const FORWARDED_HEADER_MARKERS: &[&str] = &["github", "user-agent", "authorization"];

/// Whether a header with this name is copied to the upstream request.
pub fn should_forward(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    FORWARDED_HEADER_MARKERS
        .iter()
        .any(|marker| name.contains(marker))
}

/// Build the outbound header set from the inbound one.
///
/// Always sets `content-type: application/json`; copies every value of each
/// header accepted by [`should_forward`] and drops the rest.
pub fn build_forward_headers(original: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    for (name, value) in original {
        if should_forward(name.as_str()) {
            headers.append(name.clone(), value.clone());
        }
    }

    headers
}
