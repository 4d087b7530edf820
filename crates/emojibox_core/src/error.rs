//! Registry error types and their wire codes.
use thiserror::Error;

/// Closed set of numeric codes returned to API clients.
///
/// The integer values are part of the wire contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCode {
    /// Nothing was submitted, or nothing is available to pick.
    Empty = 0,
    /// The glyph is already registered.
    AlreadyExists = 1,
    /// More than one grapheme cluster was submitted.
    MultipleCharacters = 2,
    /// The submitted glyph is not an emoji.
    NotAnEmoji = 3,
}

impl ErrorCode {
    /// Numeric value sent over the wire.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Outcome of a rejected registry operation.
///
/// Every variant except [`RegistryError::Unavailable`] is an expected,
/// user-facing validation result. The display string doubles as the
/// human-readable description sent to clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("No emoji :(")]
    EmptySubmission,

    #[error("This is already here. It was submitted by {author}")]
    AlreadyExists { author: String },

    #[error("Data contains more than one emoji. You may only submit one at a time")]
    MultipleCharacters,

    #[error("Submitted character is not an emoji")]
    NotAnEmoji,

    #[error("No emojis on server :(")]
    EmptyRegistry,

    #[error("Emoji registry is unavailable")]
    Unavailable,
}

impl RegistryError {
    /// Wire code for validation outcomes.
    ///
    /// # Returns
    /// `None` for [`RegistryError::Unavailable`], which is a server fault and
    /// has no client-facing code.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::EmptySubmission | Self::EmptyRegistry => Some(ErrorCode::Empty),
            Self::AlreadyExists { .. } => Some(ErrorCode::AlreadyExists),
            Self::MultipleCharacters => Some(ErrorCode::MultipleCharacters),
            Self::NotAnEmoji => Some(ErrorCode::NotAnEmoji),
            Self::Unavailable => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorCode, RegistryError};

    #[test]
    fn codes_match_wire_contract() {
        let cases = [
            (RegistryError::EmptySubmission, Some(0)),
            (
                RegistryError::AlreadyExists {
                    author: "alice".to_string(),
                },
                Some(1),
            ),
            (RegistryError::MultipleCharacters, Some(2)),
            (RegistryError::NotAnEmoji, Some(3)),
            (RegistryError::EmptyRegistry, Some(0)),
            (RegistryError::Unavailable, None),
        ];

        for (err, expected) in cases {
            assert_eq!(err.code().map(ErrorCode::as_u8), expected, "error: {err:?}");
        }
    }

    #[test]
    fn already_exists_description_names_original_author() {
        let err = RegistryError::AlreadyExists {
            author: "alice".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "This is already here. It was submitted by alice"
        );
    }
}
