pub mod story_mapper;

pub use story_mapper::{to_story, try_to_story};
