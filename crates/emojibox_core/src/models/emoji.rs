//! Emoji payloads exchanged with API clients.

use crate::{Entry, RegistryError};
use serde::{Deserialize, Serialize};

/// An emoji and its source.
///
/// Used both as the submit request body and as the pick response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Emoji {
    pub emoji: String,
    pub source: String,
}

impl From<Entry> for Emoji {
    fn from(entry: Entry) -> Self {
        Self {
            emoji: entry.glyph,
            source: entry.author,
        }
    }
}

/// Body returned with a rejected submission or pick.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmitError {
    pub code: u8,
    pub description: String,
}

impl SubmitError {
    /// Convert a validation outcome into its wire body.
    ///
    /// # Returns
    /// `None` when the error has no client-facing code.
    pub fn from_registry_error(err: &RegistryError) -> Option<Self> {
        err.code().map(|code| Self {
            code: code.as_u8(),
            description: err.to_string(),
        })
    }
}

/// Liveness payload with the current registry size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthReport {
    pub status: String,
    pub emojis: usize,
}
