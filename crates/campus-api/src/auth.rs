//! Auth endpoints: login, token refresh, logout.

use reqwest::Method;
use serde::Serialize;
use tracing::info;

use campus_shared::AuthTokens;

use crate::client::ApiClient;
use crate::error::Result;

#[derive(Debug, Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RefreshBody<'a> {
    refresh_token: &'a str,
}

impl ApiClient {
    /// `POST /api/auth/login/` — exchange credentials for a token pair.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthTokens> {
        let response = self
            .request(Method::POST, "/api/auth/login/")
            .json(&LoginBody { email, password })
            .send()
            .await?;

        let tokens = Self::check(response)?.json::<AuthTokens>().await?;
        info!("logged in");
        Ok(tokens)
    }

    /// `POST /api/auth/refresh/` — exchange the refresh token for a fresh
    /// pair.
    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthTokens> {
        let response = self
            .request(Method::POST, "/api/auth/refresh/")
            .json(&RefreshBody { refresh_token })
            .send()
            .await?;

        let tokens = Self::check(response)?.json::<AuthTokens>().await?;
        Ok(tokens)
    }

    /// `POST /api/auth/logout/` — invalidate the session server-side.
    ///
    /// Local token state is cleared by the caller regardless of whether
    /// this call succeeds.
    pub async fn logout(&self) -> Result<()> {
        let response = self.request(Method::POST, "/api/auth/logout/").send().await?;
        Self::check(response)?;
        Ok(())
    }
}
