//! GitHub webhook signature verification.
//!
//! GitHub signs each delivery with HMAC-SHA256 over the raw body and sends
//! the hex digest as `X-Hub-Signature-256: sha256=<hex>`.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the delivery signature.
pub const SIGNATURE_HEADER: &str = "x-hub-signature-256";

const SIGNATURE_PREFIX: &str = "sha256=";

/// Verify a `X-Hub-Signature-256` value against the raw request body.
///
/// Returns `false` for a missing prefix, non-hex digest, or mismatch.
/// The digest comparison is constant-time.
pub fn verify_github_signature(secret: &str, body: &[u8], signature: &str) -> bool {
    let digest = match signature.strip_prefix(SIGNATURE_PREFIX) {
        Some(d) => d,
        None => {
            warn!("github_signature_missing_prefix");
            return false;
        }
    };

    let expected = match hex::decode(digest) {
        Ok(bytes) => bytes,
        Err(_) => {
            warn!(signature_length = digest.len(), "github_signature_not_hex");
            return false;
        }
    };

    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => {
            warn!("github_signature_invalid_key");
            return false;
        }
    };

    mac.update(body);

    let valid = mac.verify_slice(&expected).is_ok();
    if !valid {
        warn!(body_length = body.len(), "github_signature_mismatch");
    }

    valid
}

/// Check if signature verification is enabled.
pub fn is_signature_verification_enabled(secret: &Option<String>) -> bool {
    secret
        .as_ref()
        .map(|s| !s.trim().is_empty())
        .unwrap_or(false)
}

/// Compute the header value GitHub would send for `body`.
#[cfg(test)]
pub(crate) fn sign_body(secret: &str, body: &[u8]) -> Option<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(body);
    Some(format!(
        "{}{}",
        SIGNATURE_PREFIX,
        hex::encode(mac.finalize().into_bytes())
    ))
}
