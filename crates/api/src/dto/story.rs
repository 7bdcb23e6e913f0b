use best_stories_domain::Story;
use serde::{Deserialize, Serialize};

/// Stories returned when `count` is omitted
pub const DEFAULT_COUNT: i64 = 10;

const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S+00:00";

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct BestStoriesQuery {
    #[serde(default = "default_count")]
    pub count: i64,
}

fn default_count() -> i64 {
    DEFAULT_COUNT
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoryResponse {
    pub title: String,
    pub uri: String,
    pub posted_by: String,
    pub time: String,
    pub score: i64,
    pub comment_count: i64,
}

impl StoryResponse {
    pub fn from_story(story: &Story) -> Self {
        Self {
            title: story.title.clone(),
            uri: story.uri.clone(),
            posted_by: story.posted_by.clone(),
            time: story.time.format(TIME_FORMAT).to_string(),
            score: story.score,
            comment_count: story.comment_count,
        }
    }
}
