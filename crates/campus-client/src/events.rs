//! Client event channel.
//!
//! Engine components broadcast [`ClientEvent`]s; front ends subscribe and
//! re-render on change instead of polling engine state.

use serde::Serialize;
use tokio::sync::broadcast;

use campus_shared::FollowTarget;

/// Default buffer for the broadcast channel.
const EVENT_BUFFER: usize = 64;

/// Something a front end may want to re-render for.
///
/// Serializable so front ends can forward events over IPC unchanged.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ClientEvent {
    /// The notification list or unread count changed.
    InboxUpdated { unread_count: u32 },
    /// A follow toggle was confirmed by the server.
    FollowChanged {
        target: FollowTarget,
        following: bool,
    },
    /// The server rejected the access token; the user must log in again.
    SessionExpired,
}

/// Cloneable handle to the broadcast channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<ClientEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_BUFFER);
        Self { tx }
    }

    /// Subscribe to events emitted from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<ClientEvent> {
        self.tx.subscribe()
    }

    /// Emit an event.  Having no subscribers is not an error.
    pub fn emit(&self, event: ClientEvent) {
        if self.tx.send(event).is_err() {
            tracing::trace!("event dropped: no subscribers");
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
