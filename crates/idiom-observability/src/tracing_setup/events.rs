//! Structured log events for key operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a corpus load.
pub fn corpus_loaded(records: usize, dimensions: usize, model: &str) {
    tracing::info!(
        event = "corpus_loaded",
        records = records,
        dimensions = dimensions,
        model = %model,
        "corpus loaded"
    );
}

/// Log a verification decision.
pub fn idiom_verified(idiom: &str, exists: bool, tier: &str) {
    tracing::debug!(
        event = "idiom_verified",
        idiom = %idiom,
        exists = exists,
        tier = %tier,
        "idiom verification decided"
    );
}

/// Log a remote lookup that could not be completed.
pub fn remote_lookup_failed(idiom: &str, reason: &str) {
    tracing::warn!(
        event = "remote_lookup_failed",
        idiom = %idiom,
        reason = %reason,
        "remote lookup failed, treating as not verified"
    );
}

/// Log a rejected generation attempt.
pub fn generation_attempt_rejected(attempt: usize, max_attempts: usize, candidate: &str, reason: &str) {
    tracing::info!(
        event = "generation_attempt_rejected",
        attempt = attempt,
        max_attempts = max_attempts,
        candidate = %candidate,
        reason = %reason,
        "generation attempt rejected"
    );
}

/// Log an accepted generation.
pub fn generation_accepted(idiom: &str, attempt: usize) {
    tracing::info!(
        event = "generation_accepted",
        idiom = %idiom,
        attempt = attempt,
        "verified idiom accepted"
    );
}

/// Log exhausted retries.
pub fn generation_exhausted(situation: &str, attempts: usize) {
    tracing::warn!(
        event = "generation_exhausted",
        situation = %situation,
        attempts = attempts,
        "no verified idiom after all attempts"
    );
}

/// Log a result-cache hit.
pub fn result_cache_hit(situation: &str) {
    tracing::debug!(
        event = "result_cache_hit",
        situation = %situation,
        "served from result cache"
    );
}

/// Log a reranker fallback to bi-encoder order.
pub fn rerank_degraded(reranker: &str, reason: &str) {
    tracing::warn!(
        event = "rerank_degraded",
        reranker = %reranker,
        reason = %reason,
        "reranker failed, keeping bi-encoder order"
    );
}
