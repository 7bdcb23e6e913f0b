//! Best Stories Infrastructure Layer
pub mod cache;
pub mod hacker_news;

pub use cache::{ExpiringCache, SizeBudget};
pub use hacker_news::HackerNewsClient;
