use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use best_stories_domain::config::HackerNewsConfig;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// One scripted HTTP answer
#[derive(Clone, Debug)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }
}

#[derive(Default)]
struct Script {
    // Replies are consumed front to back; the last one repeats.
    ids: Mutex<Vec<Reply>>,
    items: Mutex<HashMap<u64, Vec<Reply>>>,
    id_hits: AtomicUsize,
    item_hits: Mutex<HashMap<u64, usize>>,
}

fn next_reply(queue: &mut Vec<Reply>) -> Reply {
    match queue.len() {
        0 => Reply::json("null"),
        1 => queue[0].clone(),
        _ => queue.remove(0),
    }
}

/// In-process Hacker News stand-in bound to an ephemeral local port
pub struct FakeUpstream {
    addr: SocketAddr,
    script: Arc<Script>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl FakeUpstream {
    pub async fn start() -> Self {
        let script = Arc::new(Script::default());

        let app = Router::new()
            .route("/v0/beststories.json", get(best_stories))
            .route("/v0/item/{id}", get(item))
            .with_state(script.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            script,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn config(&self) -> HackerNewsConfig {
        HackerNewsConfig {
            base_url: format!("http://{}", self.addr),
            api_version: "v0".to_string(),
            endpoint_best_stories: "beststories.json".to_string(),
            endpoint_story_details: "item/{id}".to_string(),
            request_timeout_ms: 2_000,
            retry_attempts: 0,
            retry_base_delay_ms: 0,
        }
    }

    pub fn ids(&self, replies: Vec<Reply>) -> &Self {
        *self.script.ids.lock().unwrap() = replies;
        self
    }

    pub fn item(&self, id: u64, replies: Vec<Reply>) -> &Self {
        self.script.items.lock().unwrap().insert(id, replies);
        self
    }

    pub fn id_hits(&self) -> usize {
        self.script.id_hits.load(Ordering::SeqCst)
    }

    pub fn item_hits(&self, id: u64) -> usize {
        self.script
            .item_hits
            .lock()
            .unwrap()
            .get(&id)
            .copied()
            .unwrap_or(0)
    }
}

impl Drop for FakeUpstream {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn respond(reply: Reply) -> impl IntoResponse {
    let status = StatusCode::from_u16(reply.status).unwrap();
    (status, [(header::CONTENT_TYPE, "application/json")], reply.body)
}

async fn best_stories(State(script): State<Arc<Script>>) -> impl IntoResponse {
    script.id_hits.fetch_add(1, Ordering::SeqCst);
    let reply = next_reply(&mut script.ids.lock().unwrap());
    respond(reply)
}

async fn item(State(script): State<Arc<Script>>, Path(id): Path<u64>) -> impl IntoResponse {
    *script.item_hits.lock().unwrap().entry(id).or_insert(0) += 1;
    let reply = {
        let mut items = script.items.lock().unwrap();
        next_reply(items.entry(id).or_default())
    };
    respond(reply)
}
