//! Follow-status controller for a single entity.
//!
//! Tracks whether the current user follows one target (user, hashtag, or
//! university) and toggles it.  A toggle holds a pending marker and only
//! applies after the server confirms; a failed toggle reverts to the
//! settled pre-toggle state and propagates the error for the front end to
//! alert on.  Status checks fail open: an unreachable server renders as
//! "not following".

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, warn};

use campus_api::follows::FollowStatusRequest;
use campus_api::ApiClient;
use campus_shared::FollowTarget;

use crate::error::{ClientError, Result};
use crate::events::{ClientEvent, EventBus};

/// Where the controller is in its check/toggle cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// No status check has run yet.
    Unknown,
    /// Status check in flight.
    Checking,
    /// Server-confirmed state.
    Settled(bool),
    /// Toggle in flight; `current` is what the server last confirmed.
    Pending { current: bool },
}

pub struct FollowController {
    api: ApiClient,
    target: FollowTarget,
    phase: Mutex<Phase>,
    enabled: AtomicBool,
    events: EventBus,
}

impl FollowController {
    /// Controller for one target.  Hashtag targets are already canonical:
    /// [`FollowTarget::hashtag`] normalizes on construction.
    pub fn new(api: ApiClient, events: EventBus, target: FollowTarget) -> Self {
        Self {
            api,
            target,
            phase: Mutex::new(Phase::Unknown),
            enabled: AtomicBool::new(true),
            events,
        }
    }

    pub fn target(&self) -> &FollowTarget {
        &self.target
    }

    /// The last settled follow state.  `false` until a check completes.
    pub fn is_following(&self) -> bool {
        match *self.lock_phase() {
            Phase::Settled(following) => following,
            Phase::Pending { current } => current,
            Phase::Unknown | Phase::Checking => false,
        }
    }

    /// Whether a check or toggle is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(*self.lock_phase(), Phase::Checking | Phase::Pending { .. })
    }

    /// Front ends disable the control while e.g. the viewer is the target.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    /// Query the server for the current follow state.
    ///
    /// Failures are swallowed: the state settles to "not following" and
    /// the error is only logged.
    pub async fn load(&self) -> bool {
        {
            let mut phase = self.lock_phase();
            if matches!(*phase, Phase::Checking | Phase::Pending { .. }) {
                return self.is_following();
            }
            *phase = Phase::Checking;
        }

        let request = FollowStatusRequest::for_target(&self.target);
        let following = match self.api.follow_status(&request).await {
            Ok(status) => status.is_following(&self.target),
            Err(e) => {
                warn!(target = %self.target, error = %e, "follow status check failed; treating as not following");
                false
            }
        };

        *self.lock_phase() = Phase::Settled(following);
        debug!(target = %self.target, following, "follow status settled");
        following
    }

    /// Flip the follow state.
    ///
    /// Returns the new state on success.  Blocked while a check or
    /// another toggle is in flight, or while disabled.
    pub async fn toggle(&self) -> Result<bool> {
        if !self.enabled.load(Ordering::SeqCst) {
            return Err(ClientError::Disabled);
        }

        let current = {
            let mut phase = self.lock_phase();
            match *phase {
                Phase::Settled(current) => {
                    *phase = Phase::Pending { current };
                    current
                }
                Phase::Unknown | Phase::Checking | Phase::Pending { .. } => {
                    return Err(ClientError::Busy);
                }
            }
        };

        let result = if current {
            self.api.unfollow(&self.target).await
        } else {
            self.api.follow(&self.target).await
        };

        match result {
            Ok(()) => {
                let following = !current;
                *self.lock_phase() = Phase::Settled(following);
                self.events.emit(ClientEvent::FollowChanged {
                    target: self.target.clone(),
                    following,
                });
                Ok(following)
            }
            Err(e) => {
                // Revert: the server never confirmed the flip.
                *self.lock_phase() = Phase::Settled(current);
                Err(e.into())
            }
        }
    }

    fn lock_phase(&self) -> MutexGuard<'_, Phase> {
        self.phase.lock().unwrap_or_else(|e| e.into_inner())
    }
}
