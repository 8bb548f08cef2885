//! Typed API wrapper for application services.
//!
//! `Api` wraps an `Arc<dyn RawApiPort>` and implements the typed `ApiPort`
//! interface via serde_json conversions, so services stay generic while the
//! composition root stores a plain trait object.

use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::ports::outbound::{ApiError, ApiPort, RawApiPort};

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }
}

#[async_trait::async_trait]
impl ApiPort for Api {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.raw.get_json(path).await?;
        serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
    }

    async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError> {
        let maybe_value = self.raw.get_optional_json(path).await?;
        match maybe_value {
            None => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| ApiError::ParseError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockRawApiPort;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Named {
        name: String,
    }

    #[tokio::test]
    async fn test_get_decodes_body() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .returning(|_| Ok(json!({ "name": "Alice" })));
        let api = Api::new(Arc::new(raw));

        let named: Named = api.get("/named").await.unwrap();
        assert_eq!(named.name, "Alice");
    }

    #[tokio::test]
    async fn test_get_reports_parse_error() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json().returning(|_| Ok(json!({ "name": 5 })));
        let api = Api::new(Arc::new(raw));

        let result: Result<Named, ApiError> = api.get("/named").await;
        assert!(matches!(result, Err(ApiError::ParseError(_))));
    }

    #[tokio::test]
    async fn test_get_optional_passes_through_absent() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_optional_json().returning(|_| Ok(None));
        let api = Api::new(Arc::new(raw));

        let result: Option<Named> = api.get_optional("/named").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_transport_error_is_propagated() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .returning(|_| Err(ApiError::RequestFailed("connection refused".to_string())));
        let api = Api::new(Arc::new(raw));

        let result: Result<Named, ApiError> = api.get("/named").await;
        assert_eq!(
            result.unwrap_err(),
            ApiError::RequestFailed("connection refused".to_string())
        );
    }
}
