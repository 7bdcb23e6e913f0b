use async_trait::async_trait;
use best_stories_domain::{DomainError, ItemId, RawItem};

/// Read access to the upstream item-listing API.
///
/// Implementations own transport concerns (timeouts, retries). Callers
/// never retry.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Ordered candidate ids, best first.
    ///
    /// # Errors
    ///
    /// * `DomainError::Upstream` - transport failure or non-success status
    /// * `DomainError::Decode` - body is not a JSON array of ids
    async fn fetch_id_list(&self) -> Result<Vec<ItemId>, DomainError>;

    /// Detail of one item. `Ok(None)` when the upstream knows no such item.
    ///
    /// # Errors
    ///
    /// * `DomainError::Upstream` - transport failure or non-success status
    /// * `DomainError::Decode` - malformed item payload
    async fn fetch_item_detail(&self, id: ItemId) -> Result<Option<RawItem>, DomainError>;
}
