use best_stories_domain::{DomainError, ItemId, Story, StoryList};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, info, instrument, warn};

use crate::ports::{CacheExpiry, ItemCache, ListCache, UpstreamClient, TOP_STORIES_KEY};
use crate::services::try_to_story;

/// Immutable settings injected at construction
#[derive(Debug, Clone, Copy)]
pub struct AggregatorSettings {
    pub max_concurrency: usize,
    pub list_expiry: CacheExpiry,
    pub item_expiry: CacheExpiry,
}

/// Resolves, ranks and caches the current top stories.
///
/// Sole writer of both caches. Item failures are logged and dropped from
/// the result; only an id-list failure fails the whole request.
pub struct GetTopStoriesUseCase {
    upstream: Arc<dyn UpstreamClient>,
    item_cache: Arc<ItemCache>,
    list_cache: Arc<ListCache>,
    settings: AggregatorSettings,
}

impl GetTopStoriesUseCase {
    pub fn new(
        upstream: Arc<dyn UpstreamClient>,
        item_cache: Arc<ItemCache>,
        list_cache: Arc<ListCache>,
        settings: AggregatorSettings,
    ) -> Self {
        Self {
            upstream,
            item_cache,
            list_cache,
            settings,
        }
    }

    /// Top `count` stories ordered by score, highest first.
    ///
    /// A cached list is served while it lives, cut to `count`. Fewer than
    /// `count` stories come back when the upstream has fewer ids or some
    /// items failed to resolve.
    ///
    /// # Errors
    ///
    /// * `DomainError::InvalidArgument` - `count <= 0`, nothing is fetched
    /// * `DomainError::UpstreamUnavailable` - the id list could not be fetched
    #[instrument(skip(self))]
    pub async fn execute(&self, count: i64) -> Result<StoryList, DomainError> {
        if count <= 0 {
            return Err(DomainError::InvalidArgument(
                "Count must be greater than zero.".to_string(),
            ));
        }
        let count = usize::try_from(count).unwrap_or(usize::MAX);

        if let Some(cached) = self.list_cache.try_get(&TOP_STORIES_KEY) {
            debug!(cached = cached.len(), "Top stories cache HIT");
            return Ok(truncate(cached, count));
        }

        let ids = self.upstream.fetch_id_list().await.map_err(|e| {
            error!(error = %e, "Failed to fetch best story ids");
            DomainError::UpstreamUnavailable(e.to_string())
        })?;

        if ids.is_empty() {
            warn!("Upstream returned an empty id list");
            return Ok(Arc::from(Vec::<Story>::new()));
        }

        let wanted = &ids[..count.min(ids.len())];
        let mut stories = self.resolve_stories(wanted).await;
        rank(&mut stories);

        let result: StoryList = Arc::from(stories);
        if !self
            .list_cache
            .set(TOP_STORIES_KEY, Arc::clone(&result), self.settings.list_expiry)
        {
            warn!("Top stories cache full, result not cached");
        }

        Ok(result)
    }

    /// Fan out detail resolution under the concurrency cap.
    ///
    /// A permit is taken before each spawn, so dispatch stalls while
    /// `max_concurrency` resolutions are in flight. Each task owns the slot
    /// given by its dispatch position.
    async fn resolve_stories(&self, ids: &[ItemId]) -> Vec<Story> {
        let semaphore = Arc::new(Semaphore::new(self.settings.max_concurrency.max(1)));
        let mut slots: Vec<Option<Story>> = vec![None; ids.len()];
        let mut tasks = JoinSet::new();

        for (slot, &id) in ids.iter().enumerate() {
            let Ok(permit) = Arc::clone(&semaphore).acquire_owned().await else {
                break;
            };
            let upstream = Arc::clone(&self.upstream);
            let item_cache = Arc::clone(&self.item_cache);
            let expiry = self.settings.item_expiry;

            tasks.spawn(async move {
                let result = resolve_story(upstream.as_ref(), item_cache.as_ref(), id, expiry).await;
                drop(permit);
                (slot, result)
            });
        }

        let mut failed = 0usize;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((slot, Ok(story))) => slots[slot] = Some(story),
                Ok((_, Err(e))) => {
                    failed += 1;
                    error!(error = %e, "Could not retrieve best story");
                }
                Err(e) => {
                    failed += 1;
                    warn!(error = %e, "Story resolution task panicked");
                }
            }
        }

        let stories: Vec<Story> = slots.into_iter().flatten().collect();
        if failed > 0 {
            warn!(
                dispatched = ids.len(),
                failed, "Some stories were dropped from the result"
            );
        }
        info!(
            dispatched = ids.len(),
            resolved = stories.len(),
            "Best stories resolved"
        );

        stories
    }
}

async fn resolve_story(
    upstream: &dyn UpstreamClient,
    item_cache: &ItemCache,
    id: ItemId,
    expiry: CacheExpiry,
) -> Result<Story, DomainError> {
    if let Some(story) = item_cache.try_get(&id) {
        debug!(id, "Story cache HIT");
        return Ok(story);
    }

    debug!(id, "Story cache MISS");
    let raw = upstream
        .fetch_item_detail(id)
        .await
        .map_err(|e| DomainError::item(id, &e))?;
    let story = try_to_story(raw).map_err(|e| DomainError::item(id, &e))?;

    if !item_cache.set(id, story.clone(), expiry) {
        debug!(id, "Story cache full, item not cached");
    }

    Ok(story)
}

/// Stable sort, highest score first. Equal scores keep dispatch order.
fn rank(stories: &mut [Story]) {
    stories.sort_by(|a, b| b.score.cmp(&a.score));
}

fn truncate(list: StoryList, count: usize) -> StoryList {
    if list.len() <= count {
        list
    } else {
        Arc::from(&list[..count])
    }
}
