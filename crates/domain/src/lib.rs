//! Best Stories Domain Layer
pub mod cache_stats;
pub mod config;
pub mod errors;
pub mod raw_item;
pub mod story;

pub use cache_stats::CacheStats;
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use raw_item::{ItemId, RawItem};
pub use story::{Story, StoryList};
