//! Auth session: the process-wide token slot.
//!
//! Tokens live in memory behind an `RwLock` and are written through to the
//! store on every change, so the persisted pair never diverges from what
//! requests are using.  The session implements [`TokenProvider`], which is
//! how the API client sees the current token at call time.

use std::sync::{Arc, Mutex, RwLock};

use tracing::{info, warn};

use campus_api::{ApiClient, TokenProvider};
use campus_shared::AuthTokens;
use campus_store::Database;

use crate::error::{ClientError, Result};

pub struct AuthSession {
    store: Arc<Mutex<Database>>,
    tokens: RwLock<Option<AuthTokens>>,
}

impl AuthSession {
    /// Create a session, restoring any persisted token pair.
    pub fn restore(store: Arc<Mutex<Database>>) -> Result<Self> {
        let persisted = lock(&store).load_tokens()?;
        if persisted.is_some() {
            info!("restored persisted session");
        }
        Ok(Self {
            store,
            tokens: RwLock::new(persisted),
        })
    }

    pub fn is_logged_in(&self) -> bool {
        read(&self.tokens).is_some()
    }

    /// Snapshot of the current token pair.
    pub fn tokens(&self) -> Option<AuthTokens> {
        read(&self.tokens).clone()
    }

    /// Exchange credentials for a token pair and install it.
    pub async fn login(&self, api: &ApiClient, email: &str, password: &str) -> Result<()> {
        let tokens = api.login(email, password).await?;
        self.install(tokens)
    }

    /// Exchange the refresh token for a fresh pair and install it.
    pub async fn refresh(&self, api: &ApiClient) -> Result<()> {
        let refresh_token = read(&self.tokens)
            .as_ref()
            .map(|t| t.refresh_token.clone())
            .ok_or(ClientError::NotLoggedIn)?;

        let tokens = api.refresh(&refresh_token).await?;
        self.install(tokens)
    }

    /// Log out: tell the server (best effort), then clear memory and disk.
    pub async fn logout(&self, api: &ApiClient) -> Result<()> {
        if let Err(e) = api.logout().await {
            warn!(error = %e, "server-side logout failed; clearing local session anyway");
        }

        *write(&self.tokens) = None;
        lock(&self.store).clear_tokens()?;
        info!("logged out");
        Ok(())
    }

    fn install(&self, tokens: AuthTokens) -> Result<()> {
        lock(&self.store).save_tokens(&tokens)?;
        *write(&self.tokens) = Some(tokens);
        Ok(())
    }
}

impl TokenProvider for AuthSession {
    fn access_token(&self) -> Option<String> {
        read(&self.tokens).as_ref().map(|t| t.access_token.clone())
    }
}

// Lock helpers that recover from poisoning instead of panicking.
fn lock<'a>(store: &'a Arc<Mutex<Database>>) -> std::sync::MutexGuard<'a, Database> {
    store.lock().unwrap_or_else(|e| e.into_inner())
}

fn read<'a>(
    tokens: &'a RwLock<Option<AuthTokens>>,
) -> std::sync::RwLockReadGuard<'a, Option<AuthTokens>> {
    tokens.read().unwrap_or_else(|e| e.into_inner())
}

fn write<'a>(
    tokens: &'a RwLock<Option<AuthTokens>>,
) -> std::sync::RwLockWriteGuard<'a, Option<AuthTokens>> {
    tokens.write().unwrap_or_else(|e| e.into_inner())
}
