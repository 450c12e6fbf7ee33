//! Notification endpoints: paginated listing, read-state mutation, and the
//! developer test trigger.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::debug;

use campus_shared::Notification;

use crate::client::ApiClient;
use crate::error::Result;

/// One page of the notification list.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationPage {
    /// Notifications in reverse-chronological order.
    pub items: Vec<Notification>,
    /// Server-wide unread count at the time of the response.
    pub unread_count: u32,
    /// Whether another page exists after this one.
    pub has_more: bool,
}

#[derive(Debug, Serialize)]
struct MarkReadBody<'a> {
    ids: &'a [i64],
}

impl ApiClient {
    /// `GET /api/notifications/?page=N&page_size=M`
    ///
    /// Pages are 1-based.
    pub async fn list_notifications(&self, page: u32, page_size: u32) -> Result<NotificationPage> {
        debug!(page, page_size, "listing notifications");

        let response = self
            .request(Method::GET, "/api/notifications/")
            .query(&[("page", page), ("page_size", page_size)])
            .send()
            .await?;

        let page = Self::check(response)?.json::<NotificationPage>().await?;
        Ok(page)
    }

    /// `POST /api/notifications/mark-read/` with the given ids.
    pub async fn mark_notifications_read(&self, ids: &[i64]) -> Result<()> {
        debug!(count = ids.len(), "marking notifications read");

        let response = self
            .request(Method::POST, "/api/notifications/mark-read/")
            .json(&MarkReadBody { ids })
            .send()
            .await?;

        Self::check(response)?;
        Ok(())
    }

    /// `POST /api/notifications/mark-all-read/` (no body).
    pub async fn mark_all_notifications_read(&self) -> Result<()> {
        let response = self
            .request(Method::POST, "/api/notifications/mark-all-read/")
            .send()
            .await?;

        Self::check(response)?;
        Ok(())
    }

    /// `POST /api/notifications/test/` — ask the backend to emit a test
    /// notification to the current user.
    pub async fn send_test_notification(&self) -> Result<()> {
        let response = self
            .request(Method::POST, "/api/notifications/test/")
            .send()
            .await?;

        Self::check(response)?;
        Ok(())
    }
}
