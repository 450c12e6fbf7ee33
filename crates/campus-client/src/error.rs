use thiserror::Error;

/// Errors surfaced by the client engine.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The backend rejected or failed a request.
    #[error("API error: {0}")]
    Api(#[from] campus_api::ApiError),

    /// Local persistence failure.
    #[error("Store error: {0}")]
    Store(#[from] campus_store::StoreError),

    /// The operation conflicts with one already in flight.
    #[error("Another operation is already in progress")]
    Busy,

    /// The control was explicitly disabled by the front end.
    #[error("Control is disabled")]
    Disabled,

    /// The operation requires a logged-in session.
    #[error("Not logged in")]
    NotLoggedIn,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClientError>;
