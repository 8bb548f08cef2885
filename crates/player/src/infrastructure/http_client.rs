//! HTTP adapter for the content API (reqwest)

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::ports::outbound::{ApiError, RawApiPort};

/// Default API origin when none is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// `RawApiPort` implementation backed by reqwest
#[derive(Clone)]
pub struct HttpApiAdapter {
    client: Client,
    base_url: String,
}

impl HttpApiAdapter {
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("alice-player/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as `/api/skill-links`
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, path: &str) -> Result<reqwest::Response, ApiError> {
        let url = self.url_for(path);
        tracing::debug!(%url, "GET");

        self.client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, ApiError> {
        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl RawApiPort for HttpApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = self.send(path).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        Self::read_json(response).await
    }

    async fn get_optional_json(&self, path: &str) -> Result<Option<Value>, ApiError> {
        let response = self.send(path).await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        Self::read_json(response).await.map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_joins_base_and_path() {
        let adapter = HttpApiAdapter::new("https://alice.example.com/").unwrap();
        assert_eq!(adapter.base_url(), "https://alice.example.com");
        assert_eq!(
            adapter.url_for("/api/character-info?id=3"),
            "https://alice.example.com/api/character-info?id=3"
        );
    }

    #[test]
    fn test_default_base_url() {
        let adapter = HttpApiAdapter::new(DEFAULT_API_BASE_URL).unwrap();
        assert_eq!(
            adapter.url_for("/api/skill-links"),
            "http://localhost:3000/api/skill-links"
        );
    }

    #[tokio::test]
    async fn test_unparseable_url_is_request_failure() {
        // reqwest rejects the URL before any connection is attempted
        let adapter = HttpApiAdapter::new("not a url").unwrap();
        let result = adapter.get_json("/api/skill-links").await;
        assert!(matches!(result, Err(ApiError::RequestFailed(_))));

        let result = adapter.get_optional_json("/api/skill-links").await;
        assert!(matches!(result, Err(ApiError::RequestFailed(_))));
    }
}
