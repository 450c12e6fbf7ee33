use serde::{Deserialize, Serialize};

/// Access/refresh token pair.
///
/// A process holds a single logical slot: overwritten on login or refresh,
/// cleared on logout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthTokens {
    /// Bearer token attached to authenticated requests.
    pub access_token: String,
    /// Long-lived token exchanged for a fresh pair.
    pub refresh_token: String,
}

impl AuthTokens {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}
