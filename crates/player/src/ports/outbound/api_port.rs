//! API Port - Typed HTTP boundary used by application services
//!
//! `ApiPort` is generic over response types and therefore not object-safe.
//! Services are generic over it; the composition root supplies
//! [`Api`](crate::application::api::Api), which implements it on top of a
//! [`RawApiPort`](super::RawApiPort) trait object.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Transport-level failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connection, DNS, body read)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The server answered with a non-success status
    #[error("HTTP {status} for {path}")]
    HttpStatus { status: u16, path: String },

    /// The body could not be decoded into the expected type
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

#[async_trait::async_trait]
pub trait ApiPort: Send + Sync {
    /// GET `path` and decode the JSON body
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError>;

    /// GET `path`; a 404 yields `Ok(None)`
    async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError>;
}
