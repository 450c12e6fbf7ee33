//! # campus-store
//!
//! Local persistence for the Campus client, backed by SQLite.
//!
//! The client keeps very little on disk: the auth token pair, the
//! onboarding flag, and the push-token registration state, all in one
//! key-value table.  The crate exposes a synchronous `Database` handle
//! that wraps a `rusqlite::Connection` and provides typed helpers for
//! every persisted slot.

pub mod database;
pub mod kv;
pub mod migrations;
pub mod session;

mod error;

pub use database::Database;
pub use error::StoreError;
