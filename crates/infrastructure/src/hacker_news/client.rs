use super::retry::{AttemptError, RetryPolicy};
use async_trait::async_trait;
use best_stories_application::ports::UpstreamClient;
use best_stories_domain::config::HackerNewsConfig;
use best_stories_domain::{DomainError, ItemId, RawItem};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

const JSON_CONTENT_TYPE: &str = "application/json";

/// `UpstreamClient` over the Hacker News Firebase API.
///
/// One pooled `reqwest::Client` per instance. Every request carries the
/// configured timeout and is retried on transient failures.
pub struct HackerNewsClient {
    http: reqwest::Client,
    config: HackerNewsConfig,
    retry: RetryPolicy,
}

impl HackerNewsClient {
    pub fn new(config: HackerNewsConfig) -> Result<Self, DomainError> {
        let retry = RetryPolicy::new(config.retry_attempts, config.retry_base_delay());
        Self::with_retry(config, retry)
    }

    pub fn with_retry(config: HackerNewsConfig, retry: RetryPolicy) -> Result<Self, DomainError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));

        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.request_timeout())
            .pool_max_idle_per_host(16)
            .default_headers(headers)
            .build()
            .map_err(|e| DomainError::Upstream(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            config,
            retry,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, DomainError> {
        let body = self.retry.run(url, move || self.get_once(url)).await?;

        serde_json::from_slice(&body)
            .map_err(|e| DomainError::Decode(format!("Invalid JSON from {}: {}", url, e)))
    }

    async fn get_once(&self, url: &str) -> Result<Vec<u8>, AttemptError> {
        debug!(url = %url, "Sending upstream request");

        let response = self.http.get(url).send().await.map_err(|e| {
            AttemptError::Transient(format!("Request to {} failed: {}", url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = format!(
                "{} returned HTTP {}: {}",
                url,
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            );
            return Err(if is_transient(status) {
                AttemptError::Transient(message)
            } else {
                AttemptError::Fatal(message)
            });
        }

        let body = response.bytes().await.map_err(|e| {
            AttemptError::Transient(format!("Failed to read response from {}: {}", url, e))
        })?;

        debug!(url = %url, response_len = body.len(), "Upstream response received");
        Ok(body.to_vec())
    }
}

fn is_transient(status: StatusCode) -> bool {
    status.is_server_error()
        || status == StatusCode::REQUEST_TIMEOUT
        || status == StatusCode::TOO_MANY_REQUESTS
}

#[async_trait]
impl UpstreamClient for HackerNewsClient {
    async fn fetch_id_list(&self) -> Result<Vec<ItemId>, DomainError> {
        let url = self.config.best_stories_url();
        self.get_json(&url).await
    }

    async fn fetch_item_detail(&self, id: ItemId) -> Result<Option<RawItem>, DomainError> {
        let url = self.config.story_details_url(id);
        self.get_json(&url).await
    }
}
