use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Numeric identifier of a character.
///
/// Character content is keyed by plain integers (`/character/12`), and the
/// same integer names the portrait resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(i64);

impl CharacterId {
    /// Identifier whose portrait stands in when a character has none.
    pub const PLACEHOLDER: CharacterId = CharacterId(0);

    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CharacterId {
    type Err = DomainError;

    /// Parses a decimal integer, optionally signed. Surrounding whitespace is
    /// ignored; anything else after the digits is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("character id is empty"));
        }
        trimmed
            .parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::invalid_id(format!("'{}' is not an integer", trimmed)))
    }
}
