//! Notification domain model.
//!
//! Notifications are created server-side and fetched by the client; the
//! only client-visible mutation is the read flag, and the server stays
//! authoritative for everything.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// Notification kind as reported by the server.
///
/// Kinds the client does not know yet decode to [`NotificationKind::Other`]
/// so a single new server-side kind cannot fail a whole page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Someone started following the user.
    Follow,
    /// Someone liked one of the user's posts.
    Like,
    /// Someone commented on one of the user's posts.
    Comment,
    /// The user was mentioned in a post or comment.
    Mention,
    /// A followed hashtag or university has a new post.
    Post,
    /// Server-originated announcement.
    System,
    /// Unrecognized kind.
    #[serde(other)]
    Other,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Follow => "follow",
            NotificationKind::Like => "like",
            NotificationKind::Comment => "comment",
            NotificationKind::Mention => "mention",
            NotificationKind::Post => "post",
            NotificationKind::System => "system",
            NotificationKind::Other => "other",
        }
    }
}

/// A single notification as held client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    /// Server-assigned identifier.
    pub id: i64,
    /// What happened.
    pub kind: NotificationKind,
    /// Whether the user has seen it.
    pub read: bool,
    /// When the server created it.
    pub created_at: DateTime<Utc>,
    /// The post this notification refers to, when there is one.
    #[serde(default)]
    pub post_id: Option<i64>,
    /// The user who triggered it (absent for system notifications).
    #[serde(default)]
    pub actor_id: Option<UserId>,
    /// Rendered body text.
    #[serde(default)]
    pub body: String,
}
