//! Notification inbox: synchronizes the paginated notification list and
//! reconciles read state with the server.
//!
//! State model:
//! - `refresh()` replaces the list with page 1 and takes the unread count
//!   from the server response.
//! - `load_more()` appends the next page; the cursor only advances on a
//!   successful, non-empty fetch.
//! - `mark_read()` / `mark_all_read()` mutate the server first and only
//!   then flip local entries, so a failed call leaves local state
//!   untouched.
//!
//! Every fetch captures a generation number when it starts; a fetch whose
//! generation is stale by the time it completes is discarded.  That makes
//! a `refresh` that overlaps an outstanding `load_more` safe: only the
//! most recent list-replacing operation applies.
//!
//! Read operations fail soft (the error lands in the snapshot's `error`
//! field); the mark-read operations fail loud so the caller can alert the
//! user.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, warn};

use campus_api::ApiClient;
use campus_shared::Notification;

use crate::error::Result;
use crate::events::{ClientEvent, EventBus};

/// Synchronized view of the user's notifications.
pub struct NotificationInbox {
    api: ApiClient,
    page_size: u32,
    state: Mutex<InboxState>,
    /// Bumped by every `refresh()`; fetch results carrying an older value
    /// are stale and dropped.
    generation: AtomicU64,
    /// Reentrancy guard for the background poller.
    poller_active: AtomicBool,
    events: EventBus,
}

#[derive(Debug)]
struct InboxState {
    items: Vec<Notification>,
    unread_count: u32,
    /// Last successfully loaded page; 0 before the first fetch.
    page: u32,
    has_more: bool,
    /// A `load_more` fetch is in flight.
    loading: bool,
    /// A `refresh` fetch is in flight.
    refreshing: bool,
    error: Option<String>,
}

/// Point-in-time copy of the inbox state, for rendering.
#[derive(Debug, Clone, serde::Serialize)]
pub struct InboxSnapshot {
    pub items: Vec<Notification>,
    pub unread_count: u32,
    pub has_more: bool,
    pub loading: bool,
    pub refreshing: bool,
    pub error: Option<String>,
}

impl NotificationInbox {
    pub fn new(api: ApiClient, page_size: u32, events: EventBus) -> Self {
        Self {
            api,
            page_size,
            state: Mutex::new(InboxState {
                items: Vec::new(),
                unread_count: 0,
                page: 0,
                has_more: true,
                loading: false,
                refreshing: false,
                error: None,
            }),
            generation: AtomicU64::new(0),
            poller_active: AtomicBool::new(false),
            events,
        }
    }

    /// Current state, cloned.
    pub fn snapshot(&self) -> InboxSnapshot {
        let state = self.lock_state();
        InboxSnapshot {
            items: state.items.clone(),
            unread_count: state.unread_count,
            has_more: state.has_more,
            loading: state.loading,
            refreshing: state.refreshing,
            error: state.error.clone(),
        }
    }

    /// Unread count in the locally synced window.
    pub fn unread_count(&self) -> u32 {
        self.lock_state().unread_count
    }

    /// Re-fetch page 1 and replace the list.
    ///
    /// Errors are recorded in the snapshot, not returned; a periodic or
    /// lifecycle-triggered refresh must never take the app down.
    pub async fn refresh(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.lock_state().refreshing = true;

        let result = self.api.list_notifications(1, self.page_size).await;

        let mut state = self.lock_state();

        // A newer refresh owns the flag and the list now.
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("discarding stale refresh result");
            return;
        }
        state.refreshing = false;

        match result {
            Ok(page) => {
                state.items = page.items;
                state.page = 1;
                state.has_more = page.has_more;
                state.unread_count = page.unread_count;
                state.error = None;

                let unread_count = state.unread_count;
                drop(state);
                self.events.emit(ClientEvent::InboxUpdated { unread_count });
            }
            Err(e) => {
                warn!(error = %e, "notification refresh failed");
                state.error = Some(e.to_string());
            }
        }
    }

    /// Fetch and append the next page.
    ///
    /// No-op while another `load_more` is in flight or when the server
    /// said there is nothing further; neither case touches the network.
    pub async fn load_more(&self) {
        let (next_page, generation) = {
            let mut state = self.lock_state();
            if state.loading || !state.has_more {
                return;
            }
            state.loading = true;
            (state.page + 1, self.generation.load(Ordering::SeqCst))
        };

        let result = self.api.list_notifications(next_page, self.page_size).await;

        let mut state = self.lock_state();
        state.loading = false;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(page = next_page, "discarding stale page: list was replaced");
            return;
        }

        // An overlapping refresh may have completed and moved the cursor
        // back to 1; a page that no longer lines up with it is stale too.
        if state.page + 1 != next_page {
            debug!(page = next_page, cursor = state.page, "discarding misaligned page");
            return;
        }

        match result {
            Ok(page) => {
                state.has_more = page.has_more;
                state.error = None;

                // The cursor only advances past a page that held data.
                if !page.items.is_empty() {
                    state.items.extend(page.items);
                    state.page = next_page;
                    state.unread_count = page.unread_count;

                    let unread_count = state.unread_count;
                    drop(state);
                    self.events.emit(ClientEvent::InboxUpdated { unread_count });
                }
            }
            Err(e) => {
                warn!(page = next_page, error = %e, "loading next notification page failed");
                state.error = Some(e.to_string());
            }
        }
    }

    /// Mark the given notifications read.
    ///
    /// The server call comes first; on success matching local entries flip
    /// and the unread count drops by the number of previously-unread
    /// matches, floored at zero.  On failure local state is untouched and
    /// the error propagates.
    pub async fn mark_read(&self, ids: &[i64]) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }

        self.api.mark_notifications_read(ids).await?;

        let mut state = self.lock_state();
        let mut flipped = 0u32;
        for item in state.items.iter_mut() {
            if !item.read && ids.contains(&item.id) {
                item.read = true;
                flipped += 1;
            }
        }
        state.unread_count = state.unread_count.saturating_sub(flipped);

        let unread_count = state.unread_count;
        drop(state);
        self.events.emit(ClientEvent::InboxUpdated { unread_count });
        Ok(())
    }

    /// Mark everything read.  Same ordering and failure contract as
    /// [`mark_read`](Self::mark_read).
    pub async fn mark_all_read(&self) -> Result<()> {
        self.api.mark_all_notifications_read().await?;

        let mut state = self.lock_state();
        for item in state.items.iter_mut() {
            item.read = true;
        }
        state.unread_count = 0;
        drop(state);

        self.events.emit(ClientEvent::InboxUpdated { unread_count: 0 });
        Ok(())
    }

    /// Claim the poller slot.  Returns `false` when a poller already runs.
    pub(crate) fn try_acquire_poller(&self) -> bool {
        self.poller_active
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    pub(crate) fn release_poller(&self) {
        self.poller_active.store(false, Ordering::SeqCst);
    }

    /// Whether a background poller currently owns this inbox.
    pub fn poller_running(&self) -> bool {
        self.poller_active.load(Ordering::SeqCst)
    }

    fn lock_state(&self) -> MutexGuard<'_, InboxState> {
        // Recover from poisoning: the state is plain data and stays valid.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
