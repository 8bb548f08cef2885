//! Raw API Port - Object-safe HTTP boundary
//!
//! `RawApiPort` is the object-safe boundary implemented by adapters. It deals
//! in `serde_json::Value` only; the application layer provides a typed
//! wrapper that implements `ApiPort` on top.

use serde_json::Value;

use super::ApiError;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn get_optional_json(&self, path: &str) -> Result<Option<Value>, ApiError>;
}
