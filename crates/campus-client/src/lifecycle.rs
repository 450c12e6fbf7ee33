//! Application lifecycle signal.
//!
//! The host front end reports foreground/background transitions through a
//! [`LifecycleHandle`]; the poller watches the signal and only runs while
//! the app is active.

use tokio::sync::watch;

/// Foreground state of the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// App is foregrounded and visible.
    Active,
    /// App is backgrounded or hidden.
    Background,
}

/// Owner side of the lifecycle signal.
#[derive(Debug, Clone)]
pub struct LifecycleHandle {
    tx: watch::Sender<Lifecycle>,
}

impl LifecycleHandle {
    /// New handle, starting in the [`Lifecycle::Active`] state.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(Lifecycle::Active);
        Self { tx }
    }

    /// Report a lifecycle transition.  Repeating the current state is a
    /// no-op and does not wake watchers.
    pub fn set(&self, state: Lifecycle) {
        self.tx.send_if_modified(|current| {
            if *current == state {
                false
            } else {
                *current = state;
                true
            }
        });
    }

    pub fn current(&self) -> Lifecycle {
        *self.tx.borrow()
    }

    /// Watcher side, for the poller.
    pub fn subscribe(&self) -> watch::Receiver<Lifecycle> {
        self.tx.subscribe()
    }
}

impl Default for LifecycleHandle {
    fn default() -> Self {
        Self::new()
    }
}
