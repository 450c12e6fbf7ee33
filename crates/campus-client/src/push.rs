//! Push-token registration.
//!
//! Registration is idempotent per token value: the store remembers the
//! last token handed to the backend and whether that hand-off succeeded.
//! A failure leaves the registered flag unset so the next attempt retries.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use campus_api::push::PushPlatform;
use campus_api::ApiClient;
use campus_store::Database;

use crate::error::Result;

pub struct PushRegistrar {
    api: ApiClient,
    store: Arc<Mutex<Database>>,
}

impl PushRegistrar {
    pub fn new(api: ApiClient, store: Arc<Mutex<Database>>) -> Self {
        Self { api, store }
    }

    /// Register `token` with the backend unless the exact same token is
    /// already registered.  Returns `true` when a registration call was
    /// made.
    ///
    /// Failures propagate; a half-done attempt leaves the registered flag
    /// unset so the next call retries.
    pub async fn register_if_needed(&self, token: &str, platform: PushPlatform) -> Result<bool> {
        {
            let store = self.lock_store();
            let same_token = store.push_token()?.as_deref() == Some(token);
            if same_token && store.push_token_registered()? {
                debug!("push token already registered; skipping");
                return Ok(false);
            }

            // Remember the token before the call; the flag only flips
            // after the server accepted it.
            store.set_push_token(token)?;
            store.set_push_token_registered(false)?;
        }

        self.api.register_push_token(token, platform).await?;

        self.lock_store().set_push_token_registered(true)?;
        Ok(true)
    }

    /// Ask the backend to emit a test notification to this user.
    pub async fn send_test_notification(&self) -> Result<()> {
        self.api.send_test_notification().await?;
        Ok(())
    }

    fn lock_store(&self) -> MutexGuard<'_, Database> {
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }
}
