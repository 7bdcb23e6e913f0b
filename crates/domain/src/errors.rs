use crate::raw_item::ItemId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Could not resolve item {id}: {reason}")]
    ItemResolution { id: ItemId, reason: String },

    /// Raised by the story mapper when it is handed an absent item.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upstream request failed: {0}")]
    Upstream(String),

    #[error("Malformed upstream payload: {0}")]
    Decode(String),
}

impl DomainError {
    pub fn item(id: ItemId, source: &DomainError) -> Self {
        DomainError::ItemResolution {
            id,
            reason: source.to_string(),
        }
    }
}
