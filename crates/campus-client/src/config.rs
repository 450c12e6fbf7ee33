//! Client configuration loaded from environment variables.
//!
//! All settings have sensible defaults so a front end can start with zero
//! configuration.

use std::path::PathBuf;
use std::time::Duration;

use campus_shared::constants::{DEFAULT_API_URL, NOTIFICATIONS_PAGE_SIZE, NOTIFICATION_POLL_SECS};

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// REST API base URL.
    /// Env: `CAMPUS_API_URL`
    /// Default: `https://api.campus.app`
    pub api_url: String,

    /// Foreground notification poll period.
    /// Env: `CAMPUS_POLL_SECS`
    /// Default: 60 seconds.
    pub poll_period: Duration,

    /// Notifications fetched per page.
    pub page_size: u32,

    /// Explicit database path.  `None` uses the platform data directory.
    /// Env: `CAMPUS_DB_PATH`
    pub db_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            poll_period: Duration::from_secs(NOTIFICATION_POLL_SECS),
            page_size: NOTIFICATIONS_PAGE_SIZE,
            db_path: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("CAMPUS_API_URL") {
            if !url.is_empty() {
                config.api_url = url;
            }
        }

        if let Ok(val) = std::env::var("CAMPUS_POLL_SECS") {
            match val.parse::<u64>() {
                Ok(secs) if secs > 0 => config.poll_period = Duration::from_secs(secs),
                _ => {
                    tracing::warn!(value = %val, "Invalid CAMPUS_POLL_SECS, using default");
                }
            }
        }

        if let Ok(path) = std::env::var("CAMPUS_DB_PATH") {
            if !path.is_empty() {
                config.db_path = Some(PathBuf::from(path));
            }
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter,
        // so we do not store it here.

        config
    }
}
