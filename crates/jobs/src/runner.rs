use crate::CacheCompactionJob;
use std::sync::Arc;
use tracing::info;

/// Central orchestrator for all background jobs.
///
/// Register jobs with the builder methods, then call `.start()` once.
///
/// # Example
///
/// ```rust,ignore
/// JobRunner::new()
///     .with_cache_compaction(CacheCompactionJob::new(compact).with_interval(60))
///     .start()
///     .await;
/// ```
pub struct JobRunner {
    cache_compaction: Option<CacheCompactionJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            cache_compaction: None,
        }
    }

    pub fn with_cache_compaction(mut self, job: CacheCompactionJob) -> Self {
        self.cache_compaction = Some(job);
        self
    }

    /// Start all registered background jobs.
    pub async fn start(self) {
        info!("Starting background job runner");

        if let Some(job) = self.cache_compaction {
            Arc::new(job).start().await;
        }

        info!("All background jobs started");
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
