//! Typed helpers for the persisted client slots: auth tokens, onboarding
//! flag, and push-token registration state.

use rusqlite::params;

use campus_shared::constants::{
    KEY_ACCESS_TOKEN, KEY_INSTALLATION_ID, KEY_ONBOARDING_COMPLETE, KEY_PUSH_TOKEN,
    KEY_PUSH_TOKEN_REGISTERED, KEY_REFRESH_TOKEN,
};
use campus_shared::AuthTokens;

use crate::database::Database;
use crate::error::Result;

impl Database {
    // ------------------------------------------------------------------
    // Auth tokens
    // ------------------------------------------------------------------

    /// Persist the token pair.  Both halves are written in one
    /// transaction so a crash cannot leave a mismatched pair.
    pub fn save_tokens(&self, tokens: &AuthTokens) -> Result<()> {
        let now = chrono::Utc::now().to_rfc3339();
        self.conn().execute_batch("BEGIN")?;
        let result = (|| -> Result<()> {
            self.conn().execute(
                "INSERT OR REPLACE INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)",
                params![KEY_ACCESS_TOKEN, tokens.access_token, now],
            )?;
            self.conn().execute(
                "INSERT OR REPLACE INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)",
                params![KEY_REFRESH_TOKEN, tokens.refresh_token, now],
            )?;
            Ok(())
        })();

        match result {
            Ok(()) => {
                self.conn().execute_batch("COMMIT")?;
                Ok(())
            }
            Err(e) => {
                let _ = self.conn().execute_batch("ROLLBACK");
                Err(e)
            }
        }
    }

    /// Load the persisted token pair, if both halves are present.
    pub fn load_tokens(&self) -> Result<Option<AuthTokens>> {
        let access = self.get_value(KEY_ACCESS_TOKEN)?;
        let refresh = self.get_value(KEY_REFRESH_TOKEN)?;

        Ok(match (access, refresh) {
            (Some(access_token), Some(refresh_token)) => Some(AuthTokens {
                access_token,
                refresh_token,
            }),
            _ => None,
        })
    }

    /// Remove both token halves (logout).
    pub fn clear_tokens(&self) -> Result<()> {
        self.conn().execute(
            "DELETE FROM kv_store WHERE key IN (?1, ?2)",
            params![KEY_ACCESS_TOKEN, KEY_REFRESH_TOKEN],
        )?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Onboarding
    // ------------------------------------------------------------------

    pub fn onboarding_complete(&self) -> Result<bool> {
        self.get_flag(KEY_ONBOARDING_COMPLETE)
    }

    pub fn set_onboarding_complete(&self, complete: bool) -> Result<()> {
        self.set_flag(KEY_ONBOARDING_COMPLETE, complete)
    }

    // ------------------------------------------------------------------
    // Push token state
    // ------------------------------------------------------------------

    /// The last push token handed to the backend, if any.
    pub fn push_token(&self) -> Result<Option<String>> {
        self.get_value(KEY_PUSH_TOKEN)
    }

    pub fn set_push_token(&self, token: &str) -> Result<()> {
        self.set_value(KEY_PUSH_TOKEN, token)
    }

    /// Whether the stored push token has been registered server-side.
    pub fn push_token_registered(&self) -> Result<bool> {
        self.get_flag(KEY_PUSH_TOKEN_REGISTERED)
    }

    pub fn set_push_token_registered(&self, registered: bool) -> Result<()> {
        self.set_flag(KEY_PUSH_TOKEN_REGISTERED, registered)
    }

    // ------------------------------------------------------------------
    // Installation id
    // ------------------------------------------------------------------

    /// Stable per-install identifier, generated on first use.
    pub fn installation_id(&self) -> Result<String> {
        if let Some(id) = self.get_value(KEY_INSTALLATION_ID)? {
            return Ok(id);
        }
        let id = uuid::Uuid::new_v4().to_string();
        self.set_value(KEY_INSTALLATION_ID, &id)?;
        Ok(id)
    }
}
