//! HTTP client for the counting endpoint.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, PRAGMA};
use serde_json::Value;
use url::Url;

use crate::config::{EndpointConfig, TimeoutConfig};
use crate::counter::payload::extract_count;
use crate::counter::FetchError;
use crate::resilience::timeouts::with_timeout;

/// One-shot fetcher: every call is a fresh `GET` that bypasses caches.
#[derive(Debug, Clone)]
pub struct CountClient {
    http: reqwest::Client,
    url: Url,
    primary_field: String,
    fallback_field: String,
    request_timeout: Duration,
}

impl CountClient {
    /// Build a client with its own connection settings.
    pub fn new(endpoint: &EndpointConfig, timeouts: &TimeoutConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .user_agent(concat!("visitor-counter/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Self::with_http(http, endpoint, timeouts)
    }

    /// Use an existing `reqwest::Client`.
    pub fn with_http(
        http: reqwest::Client,
        endpoint: &EndpointConfig,
        timeouts: &TimeoutConfig,
    ) -> Result<Self, FetchError> {
        Ok(Self {
            http,
            url: Url::parse(&endpoint.url)?,
            primary_field: endpoint.primary_field.clone(),
            fallback_field: endpoint.fallback_field.clone(),
            request_timeout: Duration::from_secs(timeouts.request_secs),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Perform a single attempt.
    pub async fn fetch_count(&self) -> Result<u64, FetchError> {
        with_timeout(self.request_timeout, async {
            let response = self
                .http
                .get(self.url.clone())
                .headers(no_store_headers())
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let body = response.bytes().await?;
            let payload: Value = serde_json::from_slice(&body)?;
            extract_count(&payload, &self.primary_field, &self.fallback_field)
        })
        .await
    }
}

fn no_store_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache, no-store"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers
}
