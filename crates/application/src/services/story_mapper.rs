//! Maps upstream items to the public story shape.

use best_stories_domain::{DomainError, RawItem, Story};
use chrono::{DateTime, Utc};

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_URI: &str = "No URL";
pub const DEFAULT_POSTED_BY: &str = "Anonymous";

pub fn to_story(raw: RawItem) -> Story {
    Story {
        title: raw.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        uri: raw.url.unwrap_or_else(|| DEFAULT_URI.to_string()),
        posted_by: raw.by.unwrap_or_else(|| DEFAULT_POSTED_BY.to_string()),
        time: epoch_to_utc(raw.time),
        score: raw.score,
        comment_count: raw.descendants,
    }
}

/// Like [`to_story`], for an item the upstream may not have returned.
///
/// # Errors
///
/// * `DomainError::InvalidInput` - `raw` is `None`
pub fn try_to_story(raw: Option<RawItem>) -> Result<Story, DomainError> {
    raw.map(to_story)
        .ok_or_else(|| DomainError::InvalidInput("raw item cannot be absent".to_string()))
}

/// Seconds outside chrono's range collapse to the Unix epoch.
fn epoch_to_utc(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}
