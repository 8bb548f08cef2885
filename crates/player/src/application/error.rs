//! Page-level error types
//!
//! Both variants end the page load and replace the loading indicator with a
//! status message. A missing skill-link map is not an error at this level:
//! the service logs it and carries on with an empty map.

use thiserror::Error;

use alice_domain::{CharacterId, DomainError};

/// Errors that end a character page load
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CharacterPageError {
    /// The path segment is not an integer; nothing was fetched
    #[error("Invalid character id: {0}")]
    InvalidIdentifier(String),

    /// The character payload could not be fetched or holds no usable data
    #[error("Character {character_id} not found")]
    NotFound { character_id: CharacterId },
}

impl CharacterPageError {
    pub fn not_found(character_id: CharacterId) -> Self {
        Self::NotFound { character_id }
    }

    /// Wraps an id parse failure, keeping its message
    pub fn invalid_identifier(err: DomainError) -> Self {
        let DomainError::InvalidId(msg) = err;
        Self::InvalidIdentifier(msg)
    }

    /// Status text shown in place of the loading indicator
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidIdentifier(_) => "Invalid character ID.",
            Self::NotFound { .. } => "Character information could not be found.",
        }
    }

    /// Stable machine-readable kind, used in JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidIdentifier(_) => "invalid_identifier",
            Self::NotFound { .. } => "not_found",
        }
    }
}
