//! Event envelope types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Header carrying the event type label.
pub const EVENT_TYPE_HEADER: &str = "x-github-event";

/// Event kinds the relay distinguishes.
///
/// Only `push` and `create` are subject to filtering; every other label is
/// carried as-is in [`EventKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Push,
    Create,
    Other(String),
}

impl EventKind {
    /// Map a header value to a kind. Matching is exact and case-sensitive.
    pub fn from_label(label: &str) -> Self {
        match label {
            "push" => EventKind::Push,
            "create" => EventKind::Create,
            other => EventKind::Other(other.to_string()),
        }
    }

    /// The label as it appeared in the header.
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Push => "push",
            EventKind::Create => "create",
            EventKind::Other(label) => label,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account the event is attributed to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    /// Account name; empty when the payload carries none.
    #[serde(default)]
    pub login: String,
}

impl Sender {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
        }
    }

    /// Best-effort extraction of `payload.sender`.
    ///
    /// A missing, non-object, or login-less sender yields an empty login.
    pub fn from_payload(payload: &Value) -> Self {
        payload
            .get("sender")
            .cloned()
            .and_then(|sender| serde_json::from_value(sender).ok())
            .unwrap_or_default()
    }
}

/// A parsed inbound event.
///
/// Immutable once built; `payload` holds every field of the received body so
/// it can be re-encoded for the upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct EventEnvelope {
    pub kind: EventKind,
    pub sender: Sender,
    pub payload: Value,
}

impl EventEnvelope {
    /// Build an envelope from an event label and an already-parsed payload.
    pub fn new(event_type: &str, payload: Value) -> Self {
        Self {
            kind: EventKind::from_label(event_type),
            sender: Sender::from_payload(&payload),
            payload,
        }
    }

    /// Parse a raw JSON body into an envelope.
    pub fn parse(event_type: &str, body: &[u8]) -> Result<Self, serde_json::Error> {
        let payload: Value = serde_json::from_slice(body)?;
        Ok(Self::new(event_type, payload))
    }

    /// Re-encode the payload as the outbound JSON body.
    pub fn to_body(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_kind_from_label() {
        assert_eq!(EventKind::from_label("push"), EventKind::Push);
        assert_eq!(EventKind::from_label("create"), EventKind::Create);
        assert_eq!(
            EventKind::from_label("issues"),
            EventKind::Other("issues".to_string())
        );
        // Labels are case-sensitive
        assert_eq!(
            EventKind::from_label("Push"),
            EventKind::Other("Push".to_string())
        );
    }

    #[test]
    fn test_event_kind_display() {
        assert_eq!(EventKind::Push.to_string(), "push");
        assert_eq!(EventKind::Other("pull_request".into()).to_string(), "pull_request");
    }

    #[test]
    fn test_sender_from_payload() {
        let payload = json!({ "sender": { "login": "alice", "id": 7 } });
        assert_eq!(Sender::from_payload(&payload), Sender::new("alice"));
    }

    #[test]
    fn test_sender_missing_or_malformed_defaults_to_empty() {
        assert_eq!(Sender::from_payload(&json!({})), Sender::default());
        assert_eq!(Sender::from_payload(&json!({ "sender": null })), Sender::default());
        assert_eq!(Sender::from_payload(&json!({ "sender": "bob" })), Sender::default());
        assert_eq!(Sender::from_payload(&json!({ "sender": {} })), Sender::default());
        assert_eq!(
            Sender::from_payload(&json!({ "sender": { "login": 12 } })),
            Sender::default()
        );
        assert_eq!(Sender::from_payload(&json!([1, 2, 3])), Sender::default());
    }

    #[test]
    fn test_parse_envelope() {
        let body = br#"{ "ref": "refs/heads/main", "sender": { "login": "renovate[bot]" } }"#;
        let envelope = EventEnvelope::parse("push", body).unwrap();

        assert_eq!(envelope.kind, EventKind::Push);
        assert_eq!(envelope.sender.login, "renovate[bot]");
        assert_eq!(envelope.payload["ref"], "refs/heads/main");
    }

    #[test]
    fn test_parse_envelope_rejects_invalid_json() {
        assert!(EventEnvelope::parse("push", b"not json").is_err());
    }

    #[test]
    fn test_to_body_preserves_all_fields() {
        let body = br#"{"zen":"Keep it simple.",   "hook_id": 1, "sender": {"login": "alice"}}"#;
        let envelope = EventEnvelope::parse("ping", body).unwrap();

        let encoded = envelope.to_body().unwrap();
        let decoded: Value = serde_json::from_slice(&encoded).unwrap();
        assert_eq!(decoded, envelope.payload);
        // Re-encoded, not the raw bytes
        assert_ne!(encoded.as_slice(), body.as_slice());
    }
}
