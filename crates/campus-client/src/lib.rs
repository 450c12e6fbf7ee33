//! # campus-client
//!
//! The Campus client engine: everything a front end needs between the
//! REST API and the screen.
//!
//! - [`AuthSession`] owns the token lifecycle and feeds the API client.
//! - [`NotificationInbox`] keeps the notification list and unread count in
//!   sync with the server.
//! - [`poller`] refreshes the inbox on a timer while the app is
//!   foregrounded.
//! - [`FollowController`] tracks and toggles follow state for one entity.
//! - [`PushRegistrar`] registers the device push token exactly once per
//!   token value.
//!
//! Front ends subscribe to the [`events::EventBus`] and re-render on
//! change; they never mutate engine state directly.

pub mod app;
pub mod config;
pub mod events;
pub mod follow;
pub mod inbox;
pub mod lifecycle;
pub mod poller;
pub mod push;
pub mod session;

mod error;

pub use app::App;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use events::{ClientEvent, EventBus};
pub use follow::FollowController;
pub use inbox::{InboxSnapshot, NotificationInbox};
pub use lifecycle::{Lifecycle, LifecycleHandle};
pub use poller::PollerHandle;
pub use push::PushRegistrar;
pub use session::AuthSession;

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise tracing for a Campus front end.
///
/// Honors `RUST_LOG`; falls back to a filter that keeps the Campus crates
/// chatty and everything else quiet.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("campus_client=debug,campus_api=debug,campus_store=info,warn")
    });

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
