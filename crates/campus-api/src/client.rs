//! Campus REST API client.
//!
//! Provides a typed HTTP client for the Campus backend.  Handles base-URL
//! construction, bearer authentication, and status mapping; the endpoint
//! wrappers live in the sibling modules (`notifications`, `follows`,
//! `push`, `auth`).

use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use tracing::debug;

use campus_shared::constants::DEFAULT_API_URL;

use crate::error::{ApiError, Result};
use crate::token::TokenProvider;

/// HTTP client for the Campus REST API.
///
/// Wraps `reqwest::Client` with the API base URL and a [`TokenProvider`]
/// consulted on every request.
#[derive(Clone)]
pub struct ApiClient {
    /// The underlying HTTP client.
    http: Client,
    /// Base URL for API requests, without trailing slash.
    base_url: String,
    /// Source of the current access token.
    tokens: Arc<dyn TokenProvider>,
}

impl ApiClient {
    /// Create a client against the default API base URL.
    pub fn new(tokens: Arc<dyn TokenProvider>) -> Self {
        Self::with_base_url(DEFAULT_API_URL, tokens)
    }

    /// Create a client against a custom base URL (self-hosted backends,
    /// mock servers in tests).
    pub fn with_base_url(base_url: impl Into<String>, tokens: Arc<dyn TokenProvider>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
            tokens,
        }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request for `path`, attaching the bearer header when a
    /// token is currently available.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.http.request(method, &url);
        match self.tokens.access_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Like [`request`](Self::request), but fails with
    /// [`ApiError::MissingToken`] when no token is available.
    pub(crate) fn authed_request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let token = self.tokens.access_token().ok_or(ApiError::MissingToken)?;
        let url = format!("{}{}", self.base_url, path);
        Ok(self.http.request(method, &url).bearer_auth(token))
    }

    /// Map a response status: 401 means the token is invalid, any other
    /// non-2xx becomes [`ApiError::Status`].
    pub(crate) fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        debug!(%status, url = %response.url(), "API request rejected");

        if status == StatusCode::UNAUTHORIZED {
            Err(ApiError::Unauthorized)
        } else {
            Err(ApiError::Status { status })
        }
    }
}
