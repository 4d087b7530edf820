//! API data models.

/// Emoji request/response payloads.
pub mod emoji;

pub use emoji::{Emoji, HealthReport, SubmitError};
