// Expiring read-through cache storage

pub mod budget;
pub mod entry;
pub mod metrics;
pub mod storage;

pub use budget::SizeBudget;
pub use entry::CacheEntry;
pub use metrics::CacheMetrics;
pub use storage::ExpiringCache;
