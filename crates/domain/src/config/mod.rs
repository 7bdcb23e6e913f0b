//! Configuration module for Best Stories
//!
//! Structures are organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: HTTP binding
//! - `hacker_news`: Upstream endpoints, timeouts and retry policy
//! - `cache`: Expiry windows and size budget of both caches
//! - `aggregator`: Fan-out limits
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod aggregator;
pub mod cache;
pub mod errors;
pub mod hacker_news;
pub mod logging;
pub mod root;
pub mod server;

pub use aggregator::AggregatorConfig;
pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use hacker_news::{HackerNewsConfig, ITEM_ID_PLACEHOLDER};
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
