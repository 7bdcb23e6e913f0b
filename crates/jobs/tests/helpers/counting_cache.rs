use best_stories_application::ports::{CacheExpiry, CacheStore};
use best_stories_domain::CacheStats;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Cache stub that reports a fixed number of purged entries per pass
pub struct CountingCache {
    name: &'static str,
    purged_per_pass: usize,
    passes: AtomicUsize,
}

impl CountingCache {
    pub fn new(name: &'static str, purged_per_pass: usize) -> Self {
        Self {
            name,
            purged_per_pass,
            passes: AtomicUsize::new(0),
        }
    }

    pub fn passes(&self) -> usize {
        self.passes.load(Ordering::SeqCst)
    }
}

impl<K, V> CacheStore<K, V> for CountingCache {
    fn try_get(&self, _key: &K) -> Option<V> {
        None
    }

    fn set(&self, _key: K, _value: V, _expiry: CacheExpiry) -> bool {
        false
    }

    fn purge_expired(&self) -> usize {
        self.passes.fetch_add(1, Ordering::SeqCst);
        self.purged_per_pass
    }

    fn len(&self) -> usize {
        0
    }

    fn stats(&self) -> CacheStats {
        CacheStats::empty(self.name)
    }
}
