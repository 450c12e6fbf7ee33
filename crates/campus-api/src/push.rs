//! Push-token registration.
//!
//! Registration is authenticated: calling it without a stored access token
//! is a caller error ([`crate::ApiError::MissingToken`]), not a silent
//! skip.

use reqwest::Method;
use serde::Serialize;
use tracing::info;

use crate::client::ApiClient;
use crate::error::Result;

/// Platform tag sent alongside the push token.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PushPlatform {
    Android,
    Ios,
    Web,
}

impl PushPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            PushPlatform::Android => "android",
            PushPlatform::Ios => "ios",
            PushPlatform::Web => "web",
        }
    }
}

#[derive(Debug, Serialize)]
struct RegisterTokenBody<'a> {
    token: &'a str,
    platform: PushPlatform,
}

impl ApiClient {
    /// `POST /api/notifications/register-token/` with `{token, platform}`.
    pub async fn register_push_token(&self, token: &str, platform: PushPlatform) -> Result<()> {
        let response = self
            .authed_request(Method::POST, "/api/notifications/register-token/")?
            .json(&RegisterTokenBody { token, platform })
            .send()
            .await?;

        Self::check(response)?;
        info!(platform = platform.as_str(), "push token registered");
        Ok(())
    }
}
