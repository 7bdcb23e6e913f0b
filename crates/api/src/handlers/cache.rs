use crate::state::AppState;
use axum::{extract::State, Json};
use best_stories_domain::CacheStats;
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_cache_stats")]
pub async fn get_cache_stats(State(state): State<AppState>) -> Json<Vec<CacheStats>> {
    let stats = state.get_cache_stats.execute();

    debug!(caches = stats.len(), "Cache statistics collected");
    Json(stats)
}
