use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/v1/beststories", get(handlers::get_best_stories))
        .route("/cache/stats", get(handlers::get_cache_stats))
        .with_state(state)
}
