use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding provider: "fastembed", "ollama", "api", "hashed".
    pub provider: String,
    /// Model identifier. Must match the model recorded in the corpus manifest.
    pub model: String,
    /// Embedding dimensions.
    pub dimensions: usize,
    /// Endpoint for HTTP providers. Provider default when unset.
    pub endpoint: Option<String>,
    /// Environment variable holding the API key for the "api" provider.
    pub api_key_env: Option<String>,
    /// Batch size for bulk encoding.
    pub batch_size: usize,
    /// Query vector cache max entries.
    pub query_cache_size: u64,
    /// Request timeout for HTTP providers.
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            endpoint: None,
            api_key_env: None,
            batch_size: defaults::DEFAULT_EMBEDDING_BATCH_SIZE,
            query_cache_size: defaults::DEFAULT_QUERY_CACHE_SIZE,
            timeout_secs: defaults::DEFAULT_EMBEDDING_TIMEOUT_SECS,
        }
    }
}
