use serde::{Deserialize, Serialize};

/// One entry of the ranked list returned by `retrieve`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedIdiom {
    pub idiom: String,
    pub definition: String,
    /// Tone-marked pinyin for the headword.
    pub pinyin: String,
    /// Bi-encoder cosine similarity in `[-1, 1]`.
    pub similarity: f32,
    /// Reranker relevance logit. Unbounded.
    pub rerank_score: f32,
}
