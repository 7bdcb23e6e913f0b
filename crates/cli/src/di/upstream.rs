use best_stories_application::ports::UpstreamClient;
use best_stories_domain::Config;
use best_stories_infrastructure::HackerNewsClient;
use std::sync::Arc;
use tracing::info;

pub fn build_upstream(config: &Config) -> anyhow::Result<Arc<dyn UpstreamClient>> {
    let client = HackerNewsClient::new(config.hacker_news.clone())?;

    info!(
        best_stories = %config.hacker_news.best_stories_url(),
        timeout_ms = config.hacker_news.request_timeout_ms,
        retry_attempts = config.hacker_news.retry_attempts,
        "Hacker News client ready"
    );

    Ok(Arc::new(client))
}
