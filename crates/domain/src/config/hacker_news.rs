use crate::raw_item::ItemId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Substitution point for the item id in `endpoint_story_details`
pub const ITEM_ID_PLACEHOLDER: &str = "{id}";

/// Upstream API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HackerNewsConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Path of the ordered id list, relative to `{base_url}/{api_version}/`
    #[serde(default = "default_endpoint_best_stories")]
    pub endpoint_best_stories: String,

    /// Path template of one item, must contain `{id}` exactly once
    #[serde(default = "default_endpoint_story_details")]
    pub endpoint_story_details: String,

    /// Per-request timeout in milliseconds (default: 10000)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,

    /// Retries after the first attempt on transient failures (default: 3)
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,

    /// Backoff base; attempt `n` waits `base * 2^n` (default: 2000)
    #[serde(default = "default_retry_base_delay")]
    pub retry_base_delay_ms: u64,
}

impl HackerNewsConfig {
    pub fn api_root(&self) -> String {
        format!(
            "{}/{}/",
            self.base_url.trim_end_matches('/'),
            self.api_version.trim_matches('/')
        )
    }

    pub fn best_stories_url(&self) -> String {
        format!(
            "{}{}",
            self.api_root(),
            self.endpoint_best_stories.trim_start_matches('/')
        )
    }

    pub fn story_details_url(&self, id: ItemId) -> String {
        let path = self
            .endpoint_story_details
            .trim_start_matches('/')
            .replace(ITEM_ID_PLACEHOLDER, &id.to_string());
        format!("{}{}", self.api_root(), path)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn retry_base_delay(&self) -> Duration {
        Duration::from_millis(self.retry_base_delay_ms)
    }
}

impl Default for HackerNewsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_version: default_api_version(),
            endpoint_best_stories: default_endpoint_best_stories(),
            endpoint_story_details: default_endpoint_story_details(),
            request_timeout_ms: default_request_timeout(),
            retry_attempts: default_retry_attempts(),
            retry_base_delay_ms: default_retry_base_delay(),
        }
    }
}

fn default_base_url() -> String {
    "https://hacker-news.firebaseio.com".to_string()
}

fn default_api_version() -> String {
    "v0".to_string()
}

fn default_endpoint_best_stories() -> String {
    "beststories.json".to_string()
}

fn default_endpoint_story_details() -> String {
    "item/{id}.json".to_string()
}

fn default_request_timeout() -> u64 {
    10_000
}

fn default_retry_attempts() -> u32 {
    3
}

fn default_retry_base_delay() -> u64 {
    2_000
}
