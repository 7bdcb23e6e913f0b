#![allow(dead_code)]
pub mod fake_upstream;

pub use fake_upstream::{FakeUpstream, Reply};
