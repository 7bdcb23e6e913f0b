use best_stories_domain::{CacheStats, ItemId, Story, StoryList};
use std::time::Duration;

/// Key of the single ranked list entry
pub const TOP_STORIES_KEY: &str = "TopStories";

/// Expiry windows of one cache entry.
///
/// The entry goes away when `sliding` elapses without an access or when
/// `absolute` elapses since creation, whichever comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheExpiry {
    pub sliding: Duration,
    pub absolute: Duration,
}

impl CacheExpiry {
    pub fn new(sliding: Duration, absolute: Duration) -> Self {
        Self { sliding, absolute }
    }
}

/// Read-through cache storage with passive expiry.
///
/// Every entry costs one unit of the store's size budget. `set` returns
/// `false` when a new key was rejected because the budget is exhausted.
pub trait CacheStore<K, V>: Send + Sync {
    fn try_get(&self, key: &K) -> Option<V>;

    fn set(&self, key: K, value: V, expiry: CacheExpiry) -> bool;

    /// Drop every expired entry, returning how many were removed.
    fn purge_expired(&self) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn stats(&self) -> CacheStats;
}

/// Item-level cache: one mapped story per upstream id
pub type ItemCache = dyn CacheStore<ItemId, Story>;

/// List-level cache: the ranked result set under [`TOP_STORIES_KEY`]
pub type ListCache = dyn CacheStore<&'static str, StoryList>;
