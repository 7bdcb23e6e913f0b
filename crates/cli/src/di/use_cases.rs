use super::Caches;
use best_stories_api::AppState;
use best_stories_application::ports::{CacheExpiry, UpstreamClient};
use best_stories_application::use_cases::{
    AggregatorSettings, CompactCachesUseCase, GetCacheStatsUseCase, GetTopStoriesUseCase,
};
use best_stories_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub get_top_stories: Arc<GetTopStoriesUseCase>,
    pub get_cache_stats: Arc<GetCacheStatsUseCase>,
    pub compact_caches: Arc<CompactCachesUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, upstream: Arc<dyn UpstreamClient>, caches: &Caches) -> Self {
        let settings = AggregatorSettings {
            max_concurrency: config.aggregator.max_concurrency,
            list_expiry: CacheExpiry::new(
                config.cache.top_stories_sliding(),
                config.cache.top_stories_absolute(),
            ),
            item_expiry: CacheExpiry::new(
                config.cache.story_sliding(),
                config.cache.story_absolute(),
            ),
        };

        Self {
            get_top_stories: Arc::new(GetTopStoriesUseCase::new(
                upstream,
                caches.items.clone(),
                caches.lists.clone(),
                settings,
            )),
            get_cache_stats: Arc::new(GetCacheStatsUseCase::new(
                caches.items.clone(),
                caches.lists.clone(),
            )),
            compact_caches: Arc::new(CompactCachesUseCase::new(
                caches.items.clone(),
                caches.lists.clone(),
            )),
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            get_top_stories: self.get_top_stories.clone(),
            get_cache_stats: self.get_cache_stats.clone(),
        }
    }
}
