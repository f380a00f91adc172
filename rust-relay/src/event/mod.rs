//! Webhook event model.
//!
//! An inbound event is its kind (taken from the `X-GitHub-Event` header),
//! the sender the policy inspects, and the full JSON payload that gets
//! relayed upstream untouched apart from re-encoding.

pub mod types;

pub use types::{EventEnvelope, EventKind, Sender, EVENT_TYPE_HEADER};
