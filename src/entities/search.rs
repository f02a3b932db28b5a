use serde::{Deserialize, Serialize};

/// One page of Entrez search hits.
///
/// `ids` keeps the upstream relevance order. Upstream does not guarantee
/// `ids.len() <= retmax`, so callers truncate defensively when it matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub total_count: u64,
    pub ids: Vec<String>,
    pub query_translation: Option<String>,
}
