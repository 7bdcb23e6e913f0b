use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Public story shape served by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub title: String,
    pub uri: String,
    pub posted_by: String,
    pub time: DateTime<Utc>,
    pub score: i64,
    pub comment_count: i64,
}

/// Ranked result set. Shared between concurrent callers while cached.
pub type StoryList = Arc<[Story]>;
