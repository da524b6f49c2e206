/// Generation oracle errors. Recovered inside the attempt loop.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("oracle request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("oracle timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("oracle returned an empty response")]
    EmptyResponse,

    #[error("oracle response could not be decoded: {reason}")]
    MalformedResponse { reason: String },
}
