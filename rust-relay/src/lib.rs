//! HookRelay - conditional GitHub webhook relay.
//!
//! Receives webhook deliveries, drops `push` and `create` events sent by bot
//! accounts, and forwards everything else to a single configured target.
//!
//! ## Flow
//!
//! ```text
//! Webhook → validate → classify ─┬─ suppressed → "Not forwarding: ..."
//!                                └─ allowed → forward → target
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod event;
pub mod forward;
pub mod web;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use classify::{classify, is_bot};
pub use config::Config;
pub use error::RelayError;
pub use event::{EventEnvelope, EventKind, Sender};
pub use forward::{ForwardOutcome, Forwarder};
pub use web::{router, AppState};
