#![allow(dead_code)]


pub use memory_cache::MemoryCache;
pub use mock_upstream::{raw_item, MockUpstreamClient};
