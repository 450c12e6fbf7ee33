/// Application name
pub const APP_NAME: &str = "Campus";

/// Default REST API base URL
pub const DEFAULT_API_URL: &str = "https://api.campus.app";

/// Notifications per page
pub const NOTIFICATIONS_PAGE_SIZE: u32 = 20;

/// Foreground notification poll period in seconds
pub const NOTIFICATION_POLL_SECS: u64 = 60;

/// Persisted key-value slots
pub const KEY_ACCESS_TOKEN: &str = "accessToken";
pub const KEY_REFRESH_TOKEN: &str = "refreshToken";
pub const KEY_ONBOARDING_COMPLETE: &str = "onboardingComplete";
pub const KEY_PUSH_TOKEN: &str = "pushToken";
pub const KEY_PUSH_TOKEN_REGISTERED: &str = "pushTokenRegistered";
pub const KEY_INSTALLATION_ID: &str = "installationId";
