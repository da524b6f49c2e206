//! RetrievalEngine: encode → linear scan (top-N) → rerank (top-K).

use std::sync::Arc;

use idiom_core::config::RetrievalConfig;
use idiom_core::errors::IdiomResult;
use idiom_core::models::RetrievedIdiom;
use idiom_core::phonetic;
use idiom_core::traits::IReranker;
use idiom_corpus::CorpusIndex;
use idiom_embeddings::EmbeddingEngine;
use idiom_observability::events;
use tracing::debug;

use crate::ranking::{self, RankedCandidate};
use crate::search::{CandidateRetriever, ScoredCandidate};

/// Two-stage retrieval over a loaded corpus.
pub struct RetrievalEngine {
    encoder: Arc<EmbeddingEngine>,
    retriever: CandidateRetriever,
    reranker: Option<Box<dyn IReranker>>,
    candidate_pool: usize,
    default_top_k: usize,
}

impl RetrievalEngine {
    pub fn new(
        corpus: Arc<CorpusIndex>,
        encoder: Arc<EmbeddingEngine>,
        reranker: Option<Box<dyn IReranker>>,
        config: &RetrievalConfig,
    ) -> Self {
        Self {
            encoder,
            retriever: CandidateRetriever::new(corpus),
            reranker,
            candidate_pool: config.candidate_pool.max(1),
            default_top_k: config.default_top_k,
        }
    }

    /// Build with the reranker named in `config`.
    pub fn from_config(
        corpus: Arc<CorpusIndex>,
        encoder: Arc<EmbeddingEngine>,
        config: &RetrievalConfig,
    ) -> IdiomResult<Self> {
        let reranker = ranking::create_reranker(config)?;
        Ok(Self::new(corpus, encoder, reranker, config))
    }

    pub fn corpus(&self) -> &CorpusIndex {
        self.retriever.corpus()
    }

    pub fn default_top_k(&self) -> usize {
        self.default_top_k
    }

    /// Rank the corpus against `situation` and return the best `top_k`
    /// idioms, or the whole corpus if it is smaller.
    pub fn retrieve(&self, situation: &str, top_k: usize) -> IdiomResult<Vec<RetrievedIdiom>> {
        if top_k == 0 {
            return Ok(Vec::new());
        }

        let query = self.encoder.encode(situation)?;
        let pool = self.candidate_pool.max(top_k);
        let candidates = self.retriever.retrieve(&query, pool)?;
        debug!(pool, found = candidates.len(), "stage 1 candidates");

        let ranked = match &self.reranker {
            Some(reranker) => self.rerank_or_keep(reranker.as_ref(), situation, &candidates, top_k),
            None => keep_order(&candidates, top_k),
        };

        let corpus = self.retriever.corpus();
        Ok(ranked
            .into_iter()
            .filter_map(|r| {
                let hit = candidates.get(r.input_index)?;
                let record = &corpus.get(hit.index)?.record;
                Some(RetrievedIdiom {
                    idiom: record.idiom.clone(),
                    definition: record.definition.clone(),
                    pinyin: phonetic::annotate(&record.idiom),
                    similarity: hit.similarity,
                    rerank_score: r.score,
                })
            })
            .collect())
    }

    /// Rerank; on failure keep the bi-encoder order.
    fn rerank_or_keep(
        &self,
        reranker: &dyn IReranker,
        situation: &str,
        candidates: &[ScoredCandidate],
        top_k: usize,
    ) -> Vec<RankedCandidate> {
        let corpus = self.retriever.corpus();
        let texts: Vec<String> = candidates
            .iter()
            .map(|c| {
                corpus
                    .get(c.index)
                    .map(|e| e.record.passage_text())
                    .unwrap_or_default()
            })
            .collect();
        let text_refs: Vec<&str> = texts.iter().map(String::as_str).collect();

        match ranking::rerank(reranker, situation, &text_refs, top_k) {
            Ok(ranked) => ranked,
            Err(e) => {
                events::rerank_degraded(reranker.name(), &e.to_string());
                keep_order(candidates, top_k)
            }
        }
    }
}

fn keep_order(candidates: &[ScoredCandidate], top_k: usize) -> Vec<RankedCandidate> {
    candidates
        .iter()
        .take(top_k)
        .enumerate()
        .map(|(input_index, c)| RankedCandidate {
            input_index,
            score: c.similarity,
        })
        .collect()
}
