//! HTTP request handlers.

/// Emoji submit and pick endpoints.
pub mod emoji;
/// Liveness endpoint.
pub mod health;
