#![allow(dead_code)]
pub mod counting_upstream;
pub mod hn_server;

pub use counting_upstream::CountingUpstream;
pub use hn_server::HnServer;

use best_stories_application::ports::{CacheExpiry, ItemCache, ListCache};
use best_stories_application::use_cases::AggregatorSettings;
use best_stories_domain::{ItemId, Story, StoryList};
use best_stories_infrastructure::{ExpiringCache, SizeBudget};
use std::sync::Arc;
use std::time::Duration;

pub struct SharedCaches {
    pub budget: Arc<SizeBudget>,
    pub items: Arc<ExpiringCache<ItemId, Story>>,
    pub lists: Arc<ExpiringCache<&'static str, StoryList>>,
}

impl SharedCaches {
    pub fn new(size_limit: usize) -> Self {
        let budget = Arc::new(SizeBudget::new(size_limit));
        Self {
            items: Arc::new(ExpiringCache::with_budget("stories", budget.clone())),
            lists: Arc::new(ExpiringCache::with_budget("top_stories", budget.clone())),
            budget,
        }
    }

    pub fn item_cache(&self) -> Arc<ItemCache> {
        self.items.clone()
    }

    pub fn list_cache(&self) -> Arc<ListCache> {
        self.lists.clone()
    }
}

pub fn settings(list_secs: u64, item_secs: u64, max_concurrency: usize) -> AggregatorSettings {
    AggregatorSettings {
        max_concurrency,
        list_expiry: CacheExpiry::new(Duration::from_secs(list_secs), Duration::from_secs(list_secs)),
        item_expiry: CacheExpiry::new(Duration::from_secs(item_secs), Duration::from_secs(item_secs)),
    }
}
