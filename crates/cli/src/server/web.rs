use axum::http::{HeaderValue, Method};
use best_stories_api::{create_api_routes, AppState};
use best_stories_domain::Config;
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub async fn start_web_server(
    config: &Config,
    state: AppState,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;

    let app = create_api_routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server.cors_allowed_origins));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        address = %addr,
        endpoint = %format!("http://{}/api/v1/beststories", addr),
        "Web server ready"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    info!("Web server shut down gracefully");
    Ok(())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allow_origin = if allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(origin = %origin, error = %e, "Invalid CORS origin, skipping");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
}

async fn shutdown_signal(shutdown: CancellationToken) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                warn!(error = %e, "Failed to listen for Ctrl+C");
                shutdown.cancelled().await;
                return;
            }
            info!("Shutdown signal received");
        }
        _ = shutdown.cancelled() => {}
    }
}
