//! # campus-api
//!
//! Typed REST client for the Campus backend.  Wraps `reqwest` with base-URL
//! handling and per-request bearer authentication: the access token is
//! resolved from a [`TokenProvider`] at call time, so there is no mutable
//! process-wide header state to fall out of sync after a login or refresh.

pub mod auth;
pub mod client;
pub mod follows;
pub mod notifications;
pub mod push;
pub mod token;

mod error;

pub use client::ApiClient;
pub use error::{ApiError, Result};
pub use token::{StaticToken, TokenProvider};
