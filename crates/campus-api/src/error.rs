use thiserror::Error;

/// Errors produced by the API layer.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection, timeout, or body-decoding failure.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server rejected the access token (HTTP 401).
    #[error("Not authorized: access token missing, expired, or invalid")]
    Unauthorized,

    /// Any other non-success status.
    #[error("Server returned {status}")]
    Status { status: reqwest::StatusCode },

    /// The operation requires authentication but no token is available.
    #[error("No access token available")]
    MissingToken,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;
