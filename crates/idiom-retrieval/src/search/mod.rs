//! Stage 1 candidate search.

pub mod vector_search;

pub use vector_search::{CandidateRetriever, ScoredCandidate};
