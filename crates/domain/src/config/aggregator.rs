use serde::{Deserialize, Serialize};

/// Fan-out settings of the top stories aggregation
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AggregatorConfig {
    /// Maximum item detail requests in flight at once (default: 10)
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            max_concurrency: default_max_concurrency(),
        }
    }
}

fn default_max_concurrency() -> usize {
    10
}
