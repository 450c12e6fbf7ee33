pub mod auth;
pub mod follow;
pub mod notifications;
pub mod push;
