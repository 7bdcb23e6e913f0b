use crate::{
    dto::{BestStoriesQuery, StoryResponse},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use best_stories_domain::DomainError;
use tracing::{error, info, instrument, warn};

#[instrument(skip(state), name = "api_get_best_stories")]
pub async fn get_best_stories(
    State(state): State<AppState>,
    Query(params): Query<BestStoriesQuery>,
) -> Result<Json<Vec<StoryResponse>>, (StatusCode, String)> {
    match state.get_top_stories.execute(params.count).await {
        Ok(stories) => {
            info!(
                requested = params.count,
                returned = stories.len(),
                "Best stories served"
            );
            Ok(Json(stories.iter().map(StoryResponse::from_story).collect()))
        }
        Err(DomainError::InvalidArgument(msg)) => {
            warn!(count = params.count, error = %msg, "Rejected best stories request");
            Err((StatusCode::BAD_REQUEST, msg))
        }
        Err(e @ DomainError::UpstreamUnavailable(_)) => {
            error!(error = %e, "Upstream unavailable");
            Err((StatusCode::BAD_GATEWAY, e.to_string()))
        }
        Err(e) => {
            error!(error = %e, "Failed to retrieve best stories");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
