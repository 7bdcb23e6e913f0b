use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use best_stories_domain::config::HackerNewsConfig;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

struct Catalog {
    ids: Vec<u64>,
    scores: HashMap<u64, i64>,
    broken: HashSet<u64>,
}

/// Minimal Hacker News API served over real HTTP on loopback
pub struct HnServer {
    addr: SocketAddr,
}

impl HnServer {
    /// `broken` ids answer 500 on every request
    pub async fn start(stories: &[(u64, i64)], broken: &[u64]) -> Self {
        let ids: Vec<u64> = stories.iter().map(|&(id, _)| id).collect();
        Self::start_listing(&ids, stories, broken).await
    }

    /// Listed ids without a story answer `null`
    pub async fn start_listing(ids: &[u64], stories: &[(u64, i64)], broken: &[u64]) -> Self {
        let catalog = Arc::new(Catalog {
            ids: ids.to_vec(),
            scores: stories.iter().copied().collect(),
            broken: broken.iter().copied().collect(),
        });

        let app = Router::new()
            .route("/v0/beststories.json", get(best_stories))
            .route("/v0/item/{id}", get(item))
            .with_state(catalog);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr }
    }

    pub fn config(&self) -> HackerNewsConfig {
        HackerNewsConfig {
            base_url: format!("http://{}", self.addr),
            api_version: "v0".to_string(),
            endpoint_best_stories: "beststories.json".to_string(),
            endpoint_story_details: "item/{id}".to_string(),
            request_timeout_ms: 2_000,
            retry_attempts: 1,
            retry_base_delay_ms: 5,
        }
    }
}

async fn best_stories(State(catalog): State<Arc<Catalog>>) -> Json<Vec<u64>> {
    Json(catalog.ids.clone())
}

async fn item(
    State(catalog): State<Arc<Catalog>>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, StatusCode> {
    if catalog.broken.contains(&id) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    let body = match catalog.scores.get(&id) {
        Some(score) => json!({
            "id": id,
            "by": format!("user-{}", id),
            "score": score,
            "descendants": 2,
            "time": 1_700_000_000,
            "title": format!("story-{}", id),
            "url": format!("https://example.com/{}", id),
            "type": "story",
            "kids": [1, 2]
        }),
        None => Value::Null,
    };
    Ok(Json(body))
}
