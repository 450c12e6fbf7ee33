//! # campus-shared
//!
//! Domain types shared by every Campus crate: notifications, follow
//! targets, auth tokens, and the app-wide constants.  Everything here is
//! plain data — no I/O, no async.

pub mod auth;
pub mod constants;
pub mod follow;
pub mod notification;
pub mod types;

pub use auth::AuthTokens;
pub use follow::{FollowKind, FollowTarget, HashtagName};
pub use notification::{Notification, NotificationKind};
pub use types::{UniversityId, UserId};
