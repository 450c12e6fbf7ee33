//! Integration tests for the campus-client engine.
//!
//! Uses wiremock to simulate the Campus backend and exercises the engine
//! end-to-end: inbox synchronization, read-state reconciliation, the
//! lifecycle-aware poller, follow toggling, session lifecycle, and push
//! registration.


mod test_follow;
mod test_inbox;
mod test_session;
