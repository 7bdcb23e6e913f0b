pub mod client;
pub mod retry;

pub use client::HackerNewsClient;
pub use retry::{AttemptError, RetryPolicy};
