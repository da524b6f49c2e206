//! # idiom-retrieval
//!
//! Situation text in, ranked idioms out.
//!
//! Stage 1 scores the query vector against every corpus vector and keeps
//! the top-N by cosine similarity. Stage 2 rescores those N candidates
//! jointly with the query text and keeps the top-K. The expensive scorer
//! therefore runs N times per query regardless of corpus size.

pub mod engine;
pub mod ranking;
pub mod search;

pub use engine::RetrievalEngine;
pub use ranking::{create_reranker, rerank, LexicalReranker, RankedCandidate};
pub use search::{CandidateRetriever, ScoredCandidate};

#[cfg(feature = "reranker")]
pub use ranking::CrossEncoderReranker;
