//! Access-token resolution.
//!
//! The client asks a [`TokenProvider`] for the current access token on
//! every request instead of caching it in default headers, so a refresh or
//! logout is visible to the very next call.

/// Source of the current access token.
pub trait TokenProvider: Send + Sync {
    /// The access token to attach, or `None` when logged out.
    fn access_token(&self) -> Option<String>;
}

/// Fixed token, mainly for tests and one-shot tools.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    /// A provider that never yields a token.
    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl TokenProvider for StaticToken {
    fn access_token(&self) -> Option<String> {
        self.0.clone()
    }
}
