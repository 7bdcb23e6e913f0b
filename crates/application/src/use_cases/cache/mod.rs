pub mod compact;
pub mod get_stats;

pub use compact::CompactCachesUseCase;
pub use get_stats::GetCacheStatsUseCase;
