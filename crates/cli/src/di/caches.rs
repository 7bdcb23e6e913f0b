use best_stories_application::ports::{ItemCache, ListCache};
use best_stories_domain::{Config, ItemId, Story, StoryList};
use best_stories_infrastructure::{ExpiringCache, SizeBudget};
use std::sync::Arc;

/// Both caches draw from one size budget
pub struct Caches {
    pub budget: Arc<SizeBudget>,
    pub items: Arc<ItemCache>,
    pub lists: Arc<ListCache>,
}

impl Caches {
    pub fn new(config: &Config) -> Self {
        let budget = Arc::new(SizeBudget::new(config.cache.size_limit));

        let items: Arc<ItemCache> = Arc::new(ExpiringCache::<ItemId, Story>::with_budget(
            "stories",
            budget.clone(),
        ));
        let lists: Arc<ListCache> = Arc::new(
            ExpiringCache::<&'static str, StoryList>::with_budget("top_stories", budget.clone()),
        );

        Self {
            budget,
            items,
            lists,
        }
    }
}
