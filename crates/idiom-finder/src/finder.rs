//! IdiomFinder: the caller-facing facade.

use std::sync::Arc;

use idiom_core::config::IdiomConfig;
use idiom_core::errors::{IdiomResult, RetrievalError};
use idiom_core::models::RetrievedIdiom;
use idiom_core::IdiomAnswer;
use idiom_corpus::CorpusArtifact;
use idiom_embeddings::EmbeddingEngine;
use idiom_generation::GenerationLoop;
use idiom_retrieval::RetrievalEngine;
use idiom_verification::VerificationChain;
use tracing::info;

use crate::builder::IdiomFinderBuilder;
use crate::strategy::{Answer, Strategy};

/// Both strategies behind one object.
///
/// The verification chain is shared: generation gates on it, and
/// [`IdiomFinder::verify`] and [`IdiomFinder::retrieve_verified`] expose it
/// directly.
pub struct IdiomFinder {
    pub(crate) retrieval: Option<RetrievalEngine>,
    pub(crate) chain: Arc<VerificationChain>,
    pub(crate) generation: GenerationLoop,
    pub(crate) max_attempts: usize,
}

impl IdiomFinder {
    pub fn builder() -> IdiomFinderBuilder {
        IdiomFinderBuilder::new()
    }

    /// Build every component from configuration.
    ///
    /// Without `corpus.artifact_dir` the retrieval strategy is unavailable
    /// and [`IdiomFinder::retrieve`] returns `RetrievalError::NoCorpus`.
    pub fn from_config(config: &IdiomConfig) -> IdiomResult<Self> {
        let retrieval = if config.corpus.artifact_dir.is_some() {
            Some(build_retrieval(config)?)
        } else {
            info!("no corpus artifact configured, retrieval disabled");
            None
        };

        let chain = Arc::new(VerificationChain::from_config(&config.verification)?);
        let generation = GenerationLoop::from_config(&config.generation, Arc::clone(&chain))?;
        info!(
            retrieval = retrieval.is_some(),
            oracle = generation.oracle_name(),
            "idiom finder ready"
        );

        Ok(Self {
            retrieval,
            chain,
            generation,
            max_attempts: config.generation.max_attempts,
        })
    }

    /// Ranked idioms for `situation`, best first, at most `top_k`.
    pub fn retrieve(&self, situation: &str, top_k: usize) -> IdiomResult<Vec<RetrievedIdiom>> {
        self.retrieval_engine()?.retrieve(situation, top_k)
    }

    /// [`IdiomFinder::retrieve`], keeping only idioms the verification
    /// chain confirms. May return fewer than `top_k`.
    pub fn retrieve_verified(
        &self,
        situation: &str,
        top_k: usize,
    ) -> IdiomResult<Vec<RetrievedIdiom>> {
        let mut results = self.retrieve(situation, top_k)?;
        results.retain(|r| self.chain.verify(&r.idiom));
        Ok(results)
    }

    /// Generate-then-verify. Never fails: exhaustion returns
    /// [`IdiomAnswer::sentinel`].
    pub fn find_idiom(&self, situation: &str, max_attempts: usize) -> IdiomAnswer {
        self.generation.find_idiom(situation, max_attempts)
    }

    /// Whether `idiom` is attested by any verification tier.
    pub fn verify(&self, idiom: &str) -> bool {
        self.chain.verify(idiom)
    }

    /// Answer with the chosen strategy, using configured defaults for
    /// `top_k` and attempt count.
    pub fn answer(&self, situation: &str, strategy: Strategy) -> IdiomResult<Answer> {
        match strategy {
            Strategy::Retrieval => {
                let engine = self.retrieval_engine()?;
                let idioms = engine.retrieve(situation, engine.default_top_k())?;
                Ok(Answer::Retrieval { idioms })
            }
            Strategy::Generation => Ok(Answer::Generation {
                answer: self.find_idiom(situation, self.max_attempts),
            }),
        }
    }

    pub fn has_corpus(&self) -> bool {
        self.retrieval.is_some()
    }

    pub fn chain(&self) -> &VerificationChain {
        &self.chain
    }

    pub fn generation(&self) -> &GenerationLoop {
        &self.generation
    }

    fn retrieval_engine(&self) -> IdiomResult<&RetrievalEngine> {
        self.retrieval
            .as_ref()
            .ok_or_else(|| RetrievalError::NoCorpus.into())
    }
}

/// Manifest first, since it fixes the encoder's prefix convention.
fn build_retrieval(config: &IdiomConfig) -> IdiomResult<RetrievalEngine> {
    let artifact = CorpusArtifact::open(&config.corpus)?;
    let encoder = Arc::new(EmbeddingEngine::from_config(
        &config.embedding,
        artifact.manifest().prefixes(),
    )?);
    let corpus = Arc::new(artifact.load_index(&encoder)?);
    RetrievalEngine::from_config(corpus, encoder, &config.retrieval)
}
