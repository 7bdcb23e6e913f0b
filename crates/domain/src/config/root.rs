use serde::{Deserialize, Serialize};
use std::path::Path;

use super::aggregator::AggregatorConfig;
use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::hacker_news::{HackerNewsConfig, ITEM_ID_PLACEHOLDER};
use super::logging::LoggingConfig;
use super::server::ServerConfig;

/// Looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_PATH: &str = "best-stories.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub hacker_news: HackerNewsConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub aggregator: AggregatorConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line win over the file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub web_port: Option<u16>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from `path`, or from `best-stories.toml` when it
    /// exists, falling back to defaults. CLI overrides are applied last.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)?
            }
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(path, &content)
    }

    pub fn from_toml(origin: &str, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind_address) = overrides.bind_address {
            self.server.bind_address = bind_address;
        }
        if let Some(web_port) = overrides.web_port {
            self.server.web_port = web_port;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Reject settings the service cannot start with.
    ///
    /// A zero expiry window means "not configured yet" and is an error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let hn = &self.hacker_news;
        require_non_empty("hacker_news.base_url", &hn.base_url)?;
        require_non_empty("hacker_news.api_version", &hn.api_version)?;
        require_non_empty("hacker_news.endpoint_best_stories", &hn.endpoint_best_stories)?;
        require_non_empty(
            "hacker_news.endpoint_story_details",
            &hn.endpoint_story_details,
        )?;

        let placeholders = hn.endpoint_story_details.matches(ITEM_ID_PLACEHOLDER).count();
        if placeholders != 1 {
            return Err(ConfigError::Invalid {
                field: "hacker_news.endpoint_story_details",
                reason: format!(
                    "expected exactly one {} placeholder, found {}",
                    ITEM_ID_PLACEHOLDER, placeholders
                ),
            });
        }

        if hn.request_timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "hacker_news.request_timeout_ms",
                reason: "must be greater than zero".to_string(),
            });
        }

        let cache = &self.cache;
        require_positive(
            "cache.top_stories_sliding_minutes",
            cache.top_stories_sliding_minutes,
        )?;
        require_positive(
            "cache.top_stories_absolute_minutes",
            cache.top_stories_absolute_minutes,
        )?;
        require_positive("cache.story_sliding_minutes", cache.story_sliding_minutes)?;
        require_positive("cache.story_absolute_minutes", cache.story_absolute_minutes)?;

        if cache.size_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "cache.size_limit",
                reason: "must be greater than zero".to_string(),
            });
        }
        if cache.compaction_interval_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "cache.compaction_interval_secs",
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.aggregator.max_concurrency == 0 {
            return Err(ConfigError::Invalid {
                field: "aggregator.max_concurrency",
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.server.web_port == 0 {
            return Err(ConfigError::Invalid {
                field: "server.web_port",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Missing(field));
    }
    Ok(())
}

fn require_positive(field: &'static str, minutes: u64) -> Result<(), ConfigError> {
    if minutes == 0 {
        return Err(ConfigError::Missing(field));
    }
    Ok(())
}
