//! Deterministic joint scorer over the (query, candidate) pair.
//!
//! Measures how much of the query's weighted term mass appears in the
//! candidate, using the same terms as the hashed encoder (Latin words, Han
//! unigrams and bigrams), and maps that fraction to a logit so scores
//! behave like a cross-encoder's.

use std::collections::{HashMap, HashSet};

use idiom_core::errors::IdiomResult;
use idiom_core::traits::IReranker;
use idiom_embeddings::providers::hashed::terms;

const EPSILON: f32 = 1e-3;

/// Term-overlap reranker.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexicalReranker;

impl LexicalReranker {
    pub fn new() -> Self {
        Self
    }

    fn weight(term: &str) -> f32 {
        1.0 + (term.chars().count() as f32).ln()
    }

    /// Weighted fraction of query terms present in `candidate`, in `[0, 1]`.
    pub fn overlap(query_terms: &HashMap<String, f32>, candidate: &str) -> f32 {
        let total: f32 = query_terms.values().sum();
        if total == 0.0 {
            return 0.0;
        }
        let candidate_terms: HashSet<String> = terms(candidate).into_iter().collect();
        let matched: f32 = query_terms
            .iter()
            .filter(|(t, _)| candidate_terms.contains(t.as_str()))
            .map(|(_, w)| w)
            .sum();
        (matched / total).clamp(0.0, 1.0)
    }

    /// Map an overlap fraction to an unbounded logit.
    pub fn logit(overlap: f32) -> f32 {
        ((overlap + EPSILON) / (1.0 - overlap + EPSILON)).ln()
    }
}

impl IReranker for LexicalReranker {
    fn score(&self, query: &str, candidates: &[&str]) -> IdiomResult<Vec<f32>> {
        let query_terms: HashMap<String, f32> = terms(query)
            .into_iter()
            .map(|t| {
                let w = Self::weight(&t);
                (t, w)
            })
            .collect();
        Ok(candidates
            .iter()
            .map(|c| Self::logit(Self::overlap(&query_terms, c)))
            .collect())
    }

    fn name(&self) -> &str {
        "lexical"
    }
}
