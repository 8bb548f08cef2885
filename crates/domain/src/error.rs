//! Unified error types for the domain layer
//!
//! The markup parser and the presentation tables are total and never produce
//! errors. Only identifier parsing can fail.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),
}

impl DomainError {
    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_id_error() {
        let err = DomainError::invalid_id("'abc' is not an integer");
        assert!(matches!(err, DomainError::InvalidId(_)));
        assert_eq!(err.to_string(), "Invalid ID format: 'abc' is not an integer");
    }
}
