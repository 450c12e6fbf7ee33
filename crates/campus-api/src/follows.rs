//! Follow relationship endpoints.
//!
//! Follow and unfollow are parameterized by entity kind and id/name;
//! status is a batch query so a screen full of follow buttons costs one
//! round trip.

use std::collections::HashMap;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::debug;

use campus_shared::{FollowTarget, HashtagName, UniversityId, UserId};

use crate::client::ApiClient;
use crate::error::Result;

/// Batch follow-status query body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FollowStatusRequest {
    pub users: Vec<UserId>,
    pub hashtags: Vec<HashtagName>,
    pub universities: Vec<UniversityId>,
}

impl FollowStatusRequest {
    /// A request covering a single target.
    pub fn for_target(target: &FollowTarget) -> Self {
        let mut request = Self::default();
        match target {
            FollowTarget::User(id) => request.users.push(*id),
            FollowTarget::Hashtag(name) => request.hashtags.push(name.clone()),
            FollowTarget::University(id) => request.universities.push(*id),
        }
        request
    }
}

/// Per-category follow-state maps, keyed the same way the request was.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FollowStatusResponse {
    #[serde(default)]
    pub users: HashMap<i64, bool>,
    #[serde(default)]
    pub hashtags: HashMap<String, bool>,
    #[serde(default)]
    pub universities: HashMap<i64, bool>,
}

impl FollowStatusResponse {
    /// Whether the response says the target is followed.  Targets the
    /// server did not report default to `false`.
    pub fn is_following(&self, target: &FollowTarget) -> bool {
        match target {
            FollowTarget::User(id) => self.users.get(&id.0).copied().unwrap_or(false),
            FollowTarget::Hashtag(name) => {
                self.hashtags.get(name.as_str()).copied().unwrap_or(false)
            }
            FollowTarget::University(id) => {
                self.universities.get(&id.0).copied().unwrap_or(false)
            }
        }
    }
}

impl ApiClient {
    /// `POST /api/follows/{kind}/{id}/` — start following a target.
    pub async fn follow(&self, target: &FollowTarget) -> Result<()> {
        let path = follow_path(target);
        debug!(target = %target, "follow");

        let response = self.request(Method::POST, &path).send().await?;
        Self::check(response)?;
        Ok(())
    }

    /// `DELETE /api/follows/{kind}/{id}/` — stop following a target.
    pub async fn unfollow(&self, target: &FollowTarget) -> Result<()> {
        let path = follow_path(target);
        debug!(target = %target, "unfollow");

        let response = self.request(Method::DELETE, &path).send().await?;
        Self::check(response)?;
        Ok(())
    }

    /// `POST /api/follows/status/` — batch follow-state lookup.
    pub async fn follow_status(&self, request: &FollowStatusRequest) -> Result<FollowStatusResponse> {
        let response = self
            .request(Method::POST, "/api/follows/status/")
            .json(request)
            .send()
            .await?;

        let status = Self::check(response)?.json::<FollowStatusResponse>().await?;
        Ok(status)
    }
}

fn follow_path(target: &FollowTarget) -> String {
    format!(
        "/api/follows/{}/{}/",
        target.kind().as_str(),
        target.path_id()
    )
}
