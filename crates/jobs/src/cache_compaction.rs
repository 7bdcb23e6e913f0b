use best_stories_application::use_cases::CompactCachesUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Periodically purges expired cache entries
pub struct CacheCompactionJob {
    compact: Arc<CompactCachesUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheCompactionJob {
    pub fn new(compact: Arc<CompactCachesUseCase>) -> Self {
        Self {
            compact,
            interval_secs: 60,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting cache compaction job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheCompactionJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let purged = self.compact.execute();
                        if purged > 0 {
                            info!(purged, "Cache compaction completed");
                        } else {
                            debug!("Cache compaction found nothing to purge");
                        }
                    }
                }
            }
        });
    }
}
