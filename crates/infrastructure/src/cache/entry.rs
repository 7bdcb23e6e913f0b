use best_stories_application::ports::CacheExpiry;
use tokio::time::Instant;

/// One cached value with its expiry bookkeeping.
///
/// The value is never mutated; only `last_access` moves forward.
#[derive(Debug)]
pub struct CacheEntry<V> {
    pub value: V,
    pub created_at: Instant,
    pub last_access: Instant,
    pub expiry: CacheExpiry,
}

impl<V> CacheEntry<V> {
    pub fn new(value: V, expiry: CacheExpiry, now: Instant) -> Self {
        Self {
            value,
            created_at: now,
            last_access: now,
            expiry,
        }
    }

    /// Expired once either window has elapsed
    #[inline]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_access) >= self.expiry.sliding
            || now.saturating_duration_since(self.created_at) >= self.expiry.absolute
    }

    #[inline]
    pub fn touch(&mut self, now: Instant) {
        self.last_access = now;
    }
}
