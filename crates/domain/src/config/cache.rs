use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Expiry windows and size budget of the list and item caches.
///
/// The four expiry windows are in minutes and have no default: an absent
/// value deserializes to 0 and is rejected by `Config::validate`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default)]
    pub top_stories_sliding_minutes: u64,

    #[serde(default)]
    pub top_stories_absolute_minutes: u64,

    #[serde(default)]
    pub story_sliding_minutes: u64,

    #[serde(default)]
    pub story_absolute_minutes: u64,

    /// Entries allowed across both caches, one unit each (default: 1024)
    #[serde(default = "default_size_limit")]
    pub size_limit: usize,

    /// Seconds between background purges of expired entries (default: 60)
    #[serde(default = "default_compaction_interval")]
    pub compaction_interval_secs: u64,
}

impl CacheConfig {
    pub fn top_stories_sliding(&self) -> Duration {
        minutes(self.top_stories_sliding_minutes)
    }

    pub fn top_stories_absolute(&self) -> Duration {
        minutes(self.top_stories_absolute_minutes)
    }

    pub fn story_sliding(&self) -> Duration {
        minutes(self.story_sliding_minutes)
    }

    pub fn story_absolute(&self) -> Duration {
        minutes(self.story_absolute_minutes)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            top_stories_sliding_minutes: 0,
            top_stories_absolute_minutes: 0,
            story_sliding_minutes: 0,
            story_absolute_minutes: 0,
            size_limit: default_size_limit(),
            compaction_interval_secs: default_compaction_interval(),
        }
    }
}

fn minutes(value: u64) -> Duration {
    Duration::from_secs(value.saturating_mul(60))
}

fn default_size_limit() -> usize {
    1024
}

fn default_compaction_interval() -> u64 {
    60
}
