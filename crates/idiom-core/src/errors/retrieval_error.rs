/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("no corpus is loaded")]
    NoCorpus,

    #[error("query dimension {query} does not match corpus dimension {corpus}")]
    DimensionMismatch { query: usize, corpus: usize },

    #[error("reranking failed: {reason}")]
    RerankFailed { reason: String },

    #[error("reranker returned {actual} scores for {expected} candidates")]
    ScoreCountMismatch { expected: usize, actual: usize },
}
