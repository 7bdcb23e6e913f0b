pub mod cache;
pub mod stories;

// Re-export use cases
pub use cache::{CompactCachesUseCase, GetCacheStatsUseCase};
pub use stories::{AggregatorSettings, GetTopStoriesUseCase};
