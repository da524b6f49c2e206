//! Cross-encoder reranking via fastembed's `TextRerank`.
//!
//! Loads `bge-reranker-v2-m3`, a multilingual cross-encoder, on first
//! construction. Scores are raw relevance logits.

use std::sync::Mutex;

use fastembed::{RerankInitOptions, RerankerModel, TextRerank};
use idiom_core::errors::{EmbeddingError, IdiomResult, RetrievalError};
use idiom_core::traits::IReranker;
use tracing::info;

const MODEL_NAME: &str = "bge-reranker-v2-m3";

pub struct CrossEncoderReranker {
    model: Mutex<TextRerank>,
}

impl CrossEncoderReranker {
    pub fn load() -> IdiomResult<Self> {
        let model = TextRerank::try_new(
            RerankInitOptions::new(RerankerModel::BGERerankerV2M3)
                .with_show_download_progress(false),
        )
        .map_err(|e| EmbeddingError::ModelLoadFailed {
            model: MODEL_NAME.to_string(),
            reason: e.to_string(),
        })?;
        info!(model = MODEL_NAME, "cross-encoder reranker loaded");
        Ok(Self {
            model: Mutex::new(model),
        })
    }
}

impl IReranker for CrossEncoderReranker {
    fn score(&self, query: &str, candidates: &[&str]) -> IdiomResult<Vec<f32>> {
        if candidates.is_empty() {
            return Ok(Vec::new());
        }
        let documents: Vec<&str> = candidates.to_vec();
        let mut model = self.model.lock().map_err(|e| RetrievalError::RerankFailed {
            reason: format!("model lock poisoned: {e}"),
        })?;
        let results = model
            .rerank(query, &documents, false, None)
            .map_err(|e| RetrievalError::RerankFailed {
                reason: e.to_string(),
            })?;

        // Results come back sorted by score; restore input order.
        let mut scores = vec![f32::NAN; candidates.len()];
        for r in results {
            if let Some(slot) = scores.get_mut(r.index) {
                *slot = r.score;
            }
        }
        Ok(scores)
    }

    fn name(&self) -> &str {
        MODEL_NAME
    }
}
