use best_stories_domain::CacheStats;
use std::sync::Arc;

use crate::ports::{ItemCache, ListCache};

pub struct GetCacheStatsUseCase {
    item_cache: Arc<ItemCache>,
    list_cache: Arc<ListCache>,
}

impl GetCacheStatsUseCase {
    pub fn new(item_cache: Arc<ItemCache>, list_cache: Arc<ListCache>) -> Self {
        Self {
            item_cache,
            list_cache,
        }
    }

    /// List cache first, then item cache
    pub fn execute(&self) -> Vec<CacheStats> {
        vec![self.list_cache.stats(), self.item_cache.stats()]
    }
}
