use serde::Serialize;

/// Point-in-time counters of one cache instance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    pub name: &'static str,
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub expirations: u64,
    pub rejections: u64,
    pub hit_rate: f64,
}

impl CacheStats {
    pub fn empty(name: &'static str) -> Self {
        Self {
            name,
            entries: 0,
            hits: 0,
            misses: 0,
            insertions: 0,
            expirations: 0,
            rejections: 0,
            hit_rate: 0.0,
        }
    }
}
