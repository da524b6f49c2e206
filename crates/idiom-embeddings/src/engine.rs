//! EmbeddingEngine: the entry point for idiom-embeddings.
//!
//! Applies the prefix convention, validates provider output, normalizes
//! every vector into a `UnitVector`, and caches query vectors.

use std::time::Duration;

use idiom_core::config::EmbeddingConfig;
use idiom_core::errors::{EmbeddingError, IdiomResult};
use idiom_core::traits::IEmbeddingProvider;
use idiom_core::UnitVector;
use moka::sync::Cache;
use tracing::{debug, info};

use crate::prefix::PrefixConvention;
use crate::providers;

/// The embedding engine.
///
/// One provider serves both the corpus and the queries, so the two vector
/// spaces always match.
pub struct EmbeddingEngine {
    provider: Box<dyn IEmbeddingProvider>,
    prefixes: PrefixConvention,
    query_cache: Cache<String, UnitVector>,
    batch_size: usize,
}

impl EmbeddingEngine {
    /// Create an engine from configuration with the given prefix convention.
    pub fn from_config(config: &EmbeddingConfig, prefixes: PrefixConvention) -> IdiomResult<Self> {
        let provider = providers::create_provider(config)?;
        Self::with_provider(provider, prefixes, config.query_cache_size, config.batch_size)
    }

    /// Create an engine around an explicit provider.
    pub fn with_provider(
        provider: Box<dyn IEmbeddingProvider>,
        prefixes: PrefixConvention,
        query_cache_size: u64,
        batch_size: usize,
    ) -> IdiomResult<Self> {
        if !provider.is_available() {
            return Err(EmbeddingError::ProviderUnavailable {
                provider: provider.name().to_string(),
            }
            .into());
        }

        let query_cache = Cache::builder()
            .max_capacity(query_cache_size)
            .time_to_idle(Duration::from_secs(3600))
            .build();

        info!(
            provider = provider.name(),
            dims = provider.dimensions(),
            query_prefix = %prefixes.query_prefix,
            passage_prefix = %prefixes.passage_prefix,
            "EmbeddingEngine initialized"
        );

        Ok(Self {
            provider,
            prefixes,
            query_cache,
            batch_size: batch_size.max(1),
        })
    }

    /// Embed a search query (query prefix, cached).
    pub fn encode(&self, query: &str) -> IdiomResult<UnitVector> {
        let prefixed = self.prefixes.apply_query(query);
        let hash = blake3::hash(prefixed.as_bytes()).to_hex().to_string();

        if let Some(vec) = self.query_cache.get(&hash) {
            debug!(hash = %hash, "query embedding cache hit");
            return Ok(vec);
        }

        let raw = self.provider.embed(&prefixed)?;
        let vec = self.finish(raw)?;
        self.query_cache.insert(hash, vec.clone());
        Ok(vec)
    }

    /// Embed corpus passages (passage prefix, batched, uncached).
    pub fn encode_many(&self, texts: &[String]) -> IdiomResult<Vec<UnitVector>> {
        let mut out = Vec::with_capacity(texts.len());
        for chunk in texts.chunks(self.batch_size) {
            let prefixed: Vec<String> = chunk
                .iter()
                .map(|t| self.prefixes.apply_passage(t))
                .collect();
            let raws = self.provider.embed_batch(&prefixed)?;
            if raws.len() != prefixed.len() {
                return Err(EmbeddingError::InferenceFailed {
                    reason: format!(
                        "provider returned {} vectors for {} texts",
                        raws.len(),
                        prefixed.len()
                    ),
                }
                .into());
            }
            for raw in raws {
                out.push(self.finish(raw)?);
            }
        }
        debug!(count = out.len(), "encoded passages");
        Ok(out)
    }

    /// Check dimensions and normalize.
    fn finish(&self, raw: Vec<f32>) -> IdiomResult<UnitVector> {
        let expected = self.provider.dimensions();
        if raw.len() != expected {
            return Err(EmbeddingError::DimensionMismatch {
                expected,
                actual: raw.len(),
            }
            .into());
        }
        Ok(UnitVector::normalize(raw)?)
    }

    /// Model identifier of the active provider.
    pub fn model_name(&self) -> &str {
        self.provider.name()
    }

    pub fn dimensions(&self) -> usize {
        self.provider.dimensions()
    }

    pub fn prefixes(&self) -> &PrefixConvention {
        &self.prefixes
    }
}
