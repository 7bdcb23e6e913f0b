pub mod story;

pub use story::{BestStoriesQuery, StoryResponse, DEFAULT_COUNT};
