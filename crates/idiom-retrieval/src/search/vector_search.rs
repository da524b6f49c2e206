//! Brute-force cosine search over the corpus.
//!
//! O(corpus × dimensions) per query. Fine for corpora in the tens of
//! thousands; a larger corpus would put an ANN index behind the same
//! `retrieve` contract.

use std::cmp::Ordering;
use std::sync::Arc;

use idiom_core::errors::{IdiomResult, RetrievalError};
use idiom_core::UnitVector;
use idiom_corpus::CorpusIndex;
use rayon::prelude::*;

/// A corpus position and its cosine similarity to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate {
    pub index: usize,
    pub similarity: f32,
}

/// Scores a query vector against every corpus entry.
pub struct CandidateRetriever {
    corpus: Arc<CorpusIndex>,
}

impl CandidateRetriever {
    pub fn new(corpus: Arc<CorpusIndex>) -> Self {
        Self { corpus }
    }

    pub fn corpus(&self) -> &CorpusIndex {
        &self.corpus
    }

    /// Top `top_n` entries by descending similarity, ties in corpus order.
    /// `top_n` larger than the corpus returns the whole corpus.
    pub fn retrieve(&self, query: &UnitVector, top_n: usize) -> IdiomResult<Vec<ScoredCandidate>> {
        if query.dimensions() != self.corpus.dimensions() {
            return Err(RetrievalError::DimensionMismatch {
                query: query.dimensions(),
                corpus: self.corpus.dimensions(),
            }
            .into());
        }

        let mut scored: Vec<ScoredCandidate> = self
            .corpus
            .entries()
            .par_iter()
            .enumerate()
            .map(|(index, entry)| ScoredCandidate {
                index,
                similarity: query.cosine(&entry.vector),
            })
            .collect();

        // Stable: equal scores keep corpus order.
        scored.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
        });
        scored.truncate(top_n);
        Ok(scored)
    }
}
