pub mod cache;
pub mod health;
pub mod stories;

pub use cache::get_cache_stats;
pub use health::health_check;
pub use stories::get_best_stories;
