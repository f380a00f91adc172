//! Suppression policy for inbound events.
//!
//! Only `push` and `create` events are filtered, and only when the sender
//! looks like a bot account. Everything else is relayed.

use crate::event::{EventEnvelope, EventKind, Sender};

/// Login substring marking a GitHub App bot account.
const BOT_MARKER: &str = "[bot]";

/// Login suffix used by conventional machine users.
const BOT_SUFFIX: &str = "-bot";

/// Decide whether an event should be relayed.
///
/// Returns `None` to allow, or `Some(reason)` describing why the event is
/// suppressed. Pure and total: the same envelope always yields the same answer.
pub fn classify(envelope: &EventEnvelope) -> Option<String> {
    match envelope.kind {
        EventKind::Push | EventKind::Create => bot_sender_reason(&envelope.sender),
        EventKind::Other(_) => None,
    }
}

/// Whether a login follows one of the bot naming conventions (case-sensitive).
pub fn is_bot(login: &str) -> bool {
    login.contains(BOT_MARKER) || login.ends_with(BOT_SUFFIX)
}

fn bot_sender_reason(sender: &Sender) -> Option<String> {
    if is_bot(&sender.login) {
        Some(format!("because sender is a bot ({})", sender.login))
    } else {
        None
    }
}
