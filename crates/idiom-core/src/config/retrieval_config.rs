use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of bi-encoder candidates passed to the reranker (top-N).
    pub candidate_pool: usize,
    /// Final result count when the caller does not specify one.
    pub default_top_k: usize,
    /// Reranker: "cross-encoder", "lexical", "none".
    pub reranker: String,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            candidate_pool: defaults::DEFAULT_CANDIDATE_POOL,
            default_top_k: defaults::DEFAULT_TOP_K,
            reranker: defaults::DEFAULT_RERANKER.to_string(),
        }
    }
}
