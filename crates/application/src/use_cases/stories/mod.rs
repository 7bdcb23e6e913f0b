pub mod get_top_stories;

pub use get_top_stories::{AggregatorSettings, GetTopStoriesUseCase};
