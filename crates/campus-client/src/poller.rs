//! Background notification polling.
//!
//! While the host app is foregrounded, the poller refreshes the inbox
//! every poll period.  A transition to background cancels the timer; a
//! transition back to foreground restarts it and triggers one immediate
//! refresh.  At most one poller runs per inbox; the slot is guarded by a
//! flag on the inbox itself.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::inbox::NotificationInbox;
use crate::lifecycle::Lifecycle;

/// Handle to a running poller task.
pub struct PollerHandle {
    inbox: Arc<NotificationInbox>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Stop polling.  In-flight requests are not cancelled; their results
    /// are handled by the inbox's staleness checks like any other.
    pub fn stop(self) {
        self.task.abort();
        self.inbox.release_poller();
        debug!("notification poller stopped");
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawn the poller for `inbox`.
///
/// Returns `None` when a poller is already running for this inbox; the
/// existing one keeps its timer.
pub fn spawn(
    inbox: Arc<NotificationInbox>,
    mut lifecycle: watch::Receiver<Lifecycle>,
    period: Duration,
) -> Option<PollerHandle> {
    if !inbox.try_acquire_poller() {
        warn!("notification poller already running; not starting another");
        return None;
    }

    info!(period_secs = period.as_secs(), "notification poller started");

    let task_inbox = inbox.clone();
    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            if *lifecycle.borrow() == Lifecycle::Active {
                tokio::select! {
                    _ = ticker.tick() => {
                        task_inbox.refresh().await;
                    }
                    changed = lifecycle.changed() => {
                        if changed.is_err() {
                            // Lifecycle handle dropped: the app is gone.
                            break;
                        }
                        // Transition handled at the top of the loop.
                    }
                }
            } else {
                debug!("app backgrounded; poll timer cancelled");
                if lifecycle.changed().await.is_err() {
                    break;
                }
                if *lifecycle.borrow() == Lifecycle::Active {
                    debug!("app foregrounded; refreshing and restarting poll timer");
                    task_inbox.refresh().await;
                    ticker.reset();
                }
            }
        }

        task_inbox.release_poller();
    });

    Some(PollerHandle { inbox, task })
}
