pub mod cache_store;
pub mod upstream_client;

pub use cache_store::{CacheExpiry, CacheStore, ItemCache, ListCache, TOP_STORIES_KEY};
pub use upstream_client::UpstreamClient;
