use best_stories_application::use_cases::{GetCacheStatsUseCase, GetTopStoriesUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_top_stories: Arc<GetTopStoriesUseCase>,
    pub get_cache_stats: Arc<GetCacheStatsUseCase>,
}
