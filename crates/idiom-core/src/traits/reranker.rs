use crate::errors::IdiomResult;

/// Second-stage relevance scorer.
pub trait IReranker: Send + Sync {
    /// Score each `(query, candidate)` pair jointly.
    ///
    /// Returns one unbounded relevance logit per candidate, in input order.
    fn score(&self, query: &str, candidates: &[&str]) -> IdiomResult<Vec<f32>>;

    fn name(&self) -> &str;
}
