use async_trait::async_trait;
use best_stories_application::ports::UpstreamClient;
use best_stories_domain::{DomainError, ItemId, RawItem};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory upstream that counts every call
pub struct CountingUpstream {
    items: Vec<RawItem>,
    id_list_calls: AtomicUsize,
    detail_calls: Mutex<HashMap<ItemId, usize>>,
}

impl CountingUpstream {
    pub fn with_scores(scores: &[i64]) -> Self {
        let items = scores
            .iter()
            .enumerate()
            .map(|(i, &score)| {
                let id = i as ItemId + 100;
                RawItem {
                    id,
                    by: Some(format!("user-{}", id)),
                    score,
                    descendants: 0,
                    time: 1_700_000_000,
                    title: Some(format!("story-{}", id)),
                    url: None,
                    item_type: "story".to_string(),
                }
            })
            .collect();

        Self {
            items,
            id_list_calls: AtomicUsize::new(0),
            detail_calls: Mutex::new(HashMap::new()),
        }
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id).collect()
    }

    pub fn id_list_calls(&self) -> usize {
        self.id_list_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self, id: ItemId) -> usize {
        self.detail_calls.lock().unwrap().get(&id).copied().unwrap_or(0)
    }

    pub fn total_detail_calls(&self) -> usize {
        self.detail_calls.lock().unwrap().values().sum()
    }
}

#[async_trait]
impl UpstreamClient for CountingUpstream {
    async fn fetch_id_list(&self) -> Result<Vec<ItemId>, DomainError> {
        self.id_list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.ids())
    }

    async fn fetch_item_detail(&self, id: ItemId) -> Result<Option<RawItem>, DomainError> {
        *self.detail_calls.lock().unwrap().entry(id).or_insert(0) += 1;
        Ok(self.items.iter().find(|item| item.id == id).cloned())
    }
}
