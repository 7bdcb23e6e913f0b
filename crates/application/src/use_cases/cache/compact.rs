use std::sync::Arc;
use tracing::debug;

use crate::ports::{ItemCache, ListCache};

/// Removes expired entries from both caches so their units return to the
/// shared size budget before the next lookup would evict them lazily.
pub struct CompactCachesUseCase {
    item_cache: Arc<ItemCache>,
    list_cache: Arc<ListCache>,
}

impl CompactCachesUseCase {
    pub fn new(item_cache: Arc<ItemCache>, list_cache: Arc<ListCache>) -> Self {
        Self {
            item_cache,
            list_cache,
        }
    }

    pub fn execute(&self) -> usize {
        let lists = self.list_cache.purge_expired();
        let items = self.item_cache.purge_expired();

        debug!(
            lists,
            items,
            remaining_items = self.item_cache.len(),
            "Cache compaction pass finished"
        );

        lists + items
    }
}
