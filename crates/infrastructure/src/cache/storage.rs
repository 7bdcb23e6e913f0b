use super::{CacheEntry, CacheMetrics, SizeBudget};
use best_stories_application::ports::{CacheExpiry, CacheStore};
use best_stories_domain::CacheStats;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::hash::Hash;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, info};

const SHARD_AMOUNT: usize = 64;

/// Concurrent cache with sliding and absolute expiry.
///
/// Entries live in a sharded `DashMap`, so writers of unrelated keys only
/// contend on their own shard. Expired entries are dropped lazily on lookup
/// and in bulk by [`ExpiringCache::purge_expired`]. Each entry holds one unit
/// of a [`SizeBudget`] that may be shared with other caches.
pub struct ExpiringCache<K, V> {
    name: &'static str,
    entries: DashMap<K, CacheEntry<V>, FxBuildHasher>,
    budget: Arc<SizeBudget>,
    metrics: CacheMetrics,
}

impl<K, V> ExpiringCache<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Clone + Send + Sync,
{
    /// Cache with a private budget of `size_limit` entries
    pub fn new(name: &'static str, size_limit: usize) -> Self {
        Self::with_budget(name, Arc::new(SizeBudget::new(size_limit)))
    }

    pub fn with_budget(name: &'static str, budget: Arc<SizeBudget>) -> Self {
        info!(
            cache = name,
            size_limit = budget.limit(),
            "Initializing expiring cache"
        );

        Self {
            name,
            entries: DashMap::with_capacity_and_hasher_and_shard_amount(
                budget.limit().min(4096),
                FxBuildHasher,
                SHARD_AMOUNT,
            ),
            budget,
            metrics: CacheMetrics::default(),
        }
    }

    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }

    pub fn budget(&self) -> &Arc<SizeBudget> {
        &self.budget
    }

    fn lookup(&self, key: &K, now: Instant) -> Lookup<V> {
        match self.entries.get_mut(key) {
            Some(mut entry) if !entry.is_expired(now) => {
                entry.touch(now);
                Lookup::Hit(entry.value.clone())
            }
            Some(_) => Lookup::Expired,
            None => Lookup::Miss,
        }
    }

    fn evict_if_expired(&self, key: &K, now: Instant) {
        if self
            .entries
            .remove_if(key, |_, entry| entry.is_expired(now))
            .is_some()
        {
            self.budget.release(1);
            CacheMetrics::record(&self.metrics.expirations, 1);
        }
    }

    fn reserve_unit(&self) -> bool {
        if self.budget.try_acquire() {
            return true;
        }
        self.purge_expired();
        self.budget.try_acquire()
    }
}

enum Lookup<V> {
    Hit(V),
    Expired,
    Miss,
}

impl<K, V> CacheStore<K, V> for ExpiringCache<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Clone + Send + Sync,
{
    fn try_get(&self, key: &K) -> Option<V> {
        let now = Instant::now();

        match self.lookup(key, now) {
            Lookup::Hit(value) => {
                CacheMetrics::record(&self.metrics.hits, 1);
                Some(value)
            }
            Lookup::Expired => {
                self.evict_if_expired(key, now);
                CacheMetrics::record(&self.metrics.misses, 1);
                None
            }
            Lookup::Miss => {
                CacheMetrics::record(&self.metrics.misses, 1);
                None
            }
        }
    }

    fn set(&self, key: K, value: V, expiry: CacheExpiry) -> bool {
        let entry = CacheEntry::new(value, expiry, Instant::now());

        if !self.reserve_unit() {
            // Replacing a key that is already counted needs no new unit.
            if let Some(mut existing) = self.entries.get_mut(&key) {
                *existing = entry;
                CacheMetrics::record(&self.metrics.insertions, 1);
                return true;
            }

            CacheMetrics::record(&self.metrics.rejections, 1);
            debug!(
                cache = self.name,
                used = self.budget.used(),
                limit = self.budget.limit(),
                "Cache budget exhausted, entry rejected"
            );
            return false;
        }

        if self.entries.insert(key, entry).is_some() {
            self.budget.release(1);
        }
        CacheMetrics::record(&self.metrics.insertions, 1);
        true
    }

    fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut removed = 0;

        self.entries.retain(|_, entry| {
            if entry.is_expired(now) {
                removed += 1;
                false
            } else {
                true
            }
        });

        if removed > 0 {
            self.budget.release(removed);
            CacheMetrics::record(&self.metrics.expirations, removed as u64);
            debug!(cache = self.name, removed, "Purged expired entries");
        }

        removed
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            name: self.name,
            entries: self.entries.len(),
            hits: self.metrics.hits.load(Ordering::Relaxed),
            misses: self.metrics.misses.load(Ordering::Relaxed),
            insertions: self.metrics.insertions.load(Ordering::Relaxed),
            expirations: self.metrics.expirations.load(Ordering::Relaxed),
            rejections: self.metrics.rejections.load(Ordering::Relaxed),
            hit_rate: self.metrics.hit_rate(),
        }
    }
}
