use async_trait::async_trait;
use best_stories_application::ports::UpstreamClient;
use best_stories_domain::{DomainError, ItemId, RawItem};

pub struct StubUpstream {
    items: Vec<RawItem>,
    id_list_down: bool,
}

impl StubUpstream {
    pub fn with_scores(scores: &[i64]) -> Self {
        let items = scores
            .iter()
            .enumerate()
            .map(|(i, &score)| RawItem {
                id: i as ItemId + 1,
                by: Some("pg".to_string()),
                score,
                descendants: 3,
                time: 1_700_000_000,
                title: Some(format!("story-{}", i + 1)),
                url: Some(format!("https://example.com/{}", i + 1)),
                item_type: "story".to_string(),
            })
            .collect();

        Self {
            items,
            id_list_down: false,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            items: Vec::new(),
            id_list_down: true,
        }
    }
}

#[async_trait]
impl UpstreamClient for StubUpstream {
    async fn fetch_id_list(&self) -> Result<Vec<ItemId>, DomainError> {
        if self.id_list_down {
            return Err(DomainError::Upstream("connection refused".to_string()));
        }
        Ok(self.items.iter().map(|item| item.id).collect())
    }

    async fn fetch_item_detail(&self, id: ItemId) -> Result<Option<RawItem>, DomainError> {
        Ok(self.items.iter().find(|item| item.id == id).cloned())
    }
}
