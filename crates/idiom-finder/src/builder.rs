//! Assemble an [`IdiomFinder`] from injected capabilities.
//!
//! Used by tests and by callers that bring their own oracle, chain or
//! retrieval engine instead of building them from configuration.

use std::sync::Arc;

use idiom_core::config::{defaults, CachePolicy};
use idiom_core::errors::{ConfigError, IdiomResult};
use idiom_core::traits::IGenerationOracle;
use idiom_generation::{GenerationLoop, ResultCache};
use idiom_retrieval::RetrievalEngine;
use idiom_verification::{OfflineDictionary, ReferenceSet, VerificationCache, VerificationChain};

use crate::finder::IdiomFinder;

pub struct IdiomFinderBuilder {
    retrieval: Option<RetrievalEngine>,
    chain: Option<Arc<VerificationChain>>,
    oracle: Option<Box<dyn IGenerationOracle>>,
    result_cache: CachePolicy,
    max_output_tokens: usize,
    max_attempts: usize,
}

impl IdiomFinderBuilder {
    pub fn new() -> Self {
        Self {
            retrieval: None,
            chain: None,
            oracle: None,
            result_cache: CachePolicy::unbounded(),
            max_output_tokens: defaults::DEFAULT_MAX_OUTPUT_TOKENS,
            max_attempts: defaults::DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn retrieval(mut self, engine: RetrievalEngine) -> Self {
        self.retrieval = Some(engine);
        self
    }

    pub fn verification_chain(mut self, chain: Arc<VerificationChain>) -> Self {
        self.chain = Some(chain);
        self
    }

    pub fn oracle(mut self, oracle: Box<dyn IGenerationOracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    pub fn result_cache(mut self, policy: CachePolicy) -> Self {
        self.result_cache = policy;
        self
    }

    pub fn max_output_tokens(mut self, tokens: usize) -> Self {
        self.max_output_tokens = tokens;
        self
    }

    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// The oracle is required. Without a chain the bundled local tiers are
    /// used and there is no remote lookup.
    pub fn build(self) -> IdiomResult<IdiomFinder> {
        let oracle = self.oracle.ok_or_else(|| ConfigError::MissingSetting {
            key: "generation.provider".to_string(),
            reason: "no generation oracle supplied".to_string(),
        })?;
        let chain = self.chain.unwrap_or_else(|| {
            Arc::new(VerificationChain::new(
                ReferenceSet::bundled(),
                OfflineDictionary::bundled(),
                None,
                VerificationCache::unbounded(),
            ))
        });
        let generation = GenerationLoop::new(
            oracle,
            Arc::clone(&chain),
            ResultCache::new(&self.result_cache),
            self.max_output_tokens,
        )
        .with_default_attempts(self.max_attempts);

        Ok(IdiomFinder {
            retrieval: self.retrieval,
            chain,
            generation,
            max_attempts: self.max_attempts,
        })
    }
}

impl Default for IdiomFinderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
