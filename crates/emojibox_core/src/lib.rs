//! Core domain library for EmojiBox (emoji predicate, registry, config, models).

/// Configuration loading and defaults.
pub mod config;
/// Single-glyph emoji detection.
pub mod emoji;
/// Registry error taxonomy and wire codes.
pub mod error;
/// Data models for API requests and responses.
pub mod models;
/// In-memory emoji registry shared by request handlers.
pub mod registry;

pub use config::{Config, DEFAULT_PORT, DEFAULT_SEED};
pub use error::{ErrorCode, RegistryError};
pub use registry::{EmojiRegistry, Entry, SYSTEM_AUTHOR};
