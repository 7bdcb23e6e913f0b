use serde::Deserialize;

pub type ItemId = u64;

/// Item detail as returned by the upstream item endpoint.
///
/// Only the fields the aggregator reads are kept; unknown fields
/// (`kids`, `parts`, ...) are ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawItem {
    pub id: ItemId,

    #[serde(default)]
    pub by: Option<String>,

    #[serde(default)]
    pub score: i64,

    /// Total comment count. Job postings carry no `descendants` field.
    #[serde(default)]
    pub descendants: i64,

    /// Creation time, Unix epoch seconds (UTC)
    #[serde(default)]
    pub time: i64,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(rename = "type", default)]
    pub item_type: String,
}
