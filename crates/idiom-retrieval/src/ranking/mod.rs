//! Stage 2 reranking: score each (query, candidate) pair, sort, truncate.

pub mod lexical;

#[cfg(feature = "reranker")]
pub mod cross_encoder;

pub use lexical::LexicalReranker;

#[cfg(feature = "reranker")]
pub use cross_encoder::CrossEncoderReranker;

use std::cmp::Ordering;

use idiom_core::config::RetrievalConfig;
use idiom_core::errors::{ConfigError, IdiomResult, RetrievalError};
use idiom_core::traits::IReranker;

/// A candidate's position in the reranker input and its relevance logit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedCandidate {
    pub input_index: usize,
    pub score: f32,
}

/// Score `candidates` against `query` and return the best `top_k`.
///
/// The result is a permutation of the input positions before truncation:
/// nothing is dropped or invented by scoring. Order is descending score,
/// ties in input order.
pub fn rerank(
    reranker: &dyn IReranker,
    query: &str,
    candidates: &[&str],
    top_k: usize,
) -> IdiomResult<Vec<RankedCandidate>> {
    if candidates.is_empty() || top_k == 0 {
        return Ok(Vec::new());
    }

    let scores = reranker.score(query, candidates)?;
    if scores.len() != candidates.len() {
        return Err(RetrievalError::ScoreCountMismatch {
            expected: candidates.len(),
            actual: scores.len(),
        }
        .into());
    }
    if scores.iter().any(|s| s.is_nan()) {
        return Err(RetrievalError::RerankFailed {
            reason: format!("{} produced a NaN score", reranker.name()),
        }
        .into());
    }

    let mut ranked: Vec<RankedCandidate> = scores
        .into_iter()
        .enumerate()
        .map(|(input_index, score)| RankedCandidate { input_index, score })
        .collect();
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked.truncate(top_k);
    Ok(ranked)
}

/// Create the configured reranker. `"none"` yields `None`: the bi-encoder
/// ranking is final and its cosine doubles as the rerank score.
pub fn create_reranker(config: &RetrievalConfig) -> IdiomResult<Option<Box<dyn IReranker>>> {
    match config.reranker.as_str() {
        "none" => Ok(None),
        "lexical" => Ok(Some(Box::new(LexicalReranker::new()))),
        #[cfg(feature = "reranker")]
        "cross-encoder" => Ok(Some(Box::new(CrossEncoderReranker::load()?))),
        #[cfg(not(feature = "reranker"))]
        "cross-encoder" => Err(ConfigError::UnknownProvider {
            component: "reranker".to_string(),
            name: "cross-encoder (built without the `reranker` feature)".to_string(),
        }
        .into()),
        other => Err(ConfigError::UnknownProvider {
            component: "reranker".to_string(),
            name: other.to_string(),
        }
        .into()),
    }
}
