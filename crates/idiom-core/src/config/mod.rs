mod cache_policy;
mod corpus_config;
pub mod defaults;
mod embedding_config;
mod generation_config;
mod observability_config;
mod retrieval_config;
mod verification_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use cache_policy::CachePolicy;
pub use corpus_config::CorpusConfig;
pub use embedding_config::EmbeddingConfig;
pub use generation_config::GenerationConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;
pub use verification_config::VerificationConfig;

use crate::errors::{ConfigError, IdiomError, IdiomResult};

/// Top-level configuration, one section per subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IdiomConfig {
    pub corpus: CorpusConfig,
    pub embedding: EmbeddingConfig,
    pub retrieval: RetrievalConfig,
    pub verification: VerificationConfig,
    pub generation: GenerationConfig,
    pub observability: ObservabilityConfig,
}

impl IdiomConfig {
    /// Parse a TOML document. Missing sections and fields take defaults.
    pub fn from_toml(s: &str) -> IdiomResult<Self> {
        toml::from_str(s).map_err(|e| {
            ConfigError::ParseFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> IdiomResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| IdiomError::io(path, e))?;
        Self::from_toml(&content)
    }
}
