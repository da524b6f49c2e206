mod config_error;
mod corpus_error;
mod embedding_error;
mod generation_error;
mod retrieval_error;
mod verification_error;

pub use config_error::ConfigError;
pub use corpus_error::CorpusError;
pub use embedding_error::EmbeddingError;
pub use generation_error::GenerationError;
pub use retrieval_error::RetrievalError;
pub use verification_error::VerificationError;

/// Top-level error for the idiom finder.
#[derive(Debug, thiserror::Error)]
pub enum IdiomError {
    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    #[error(transparent)]
    CorpusError(#[from] CorpusError),

    #[error(transparent)]
    EmbeddingError(#[from] EmbeddingError),

    #[error(transparent)]
    RetrievalError(#[from] RetrievalError),

    #[error(transparent)]
    VerificationError(#[from] VerificationError),

    #[error(transparent)]
    GenerationError(#[from] GenerationError),

    #[error("I/O error at {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IdiomError {
    /// Wrap an `std::io::Error` with the path it occurred on.
    pub fn io(path: impl AsRef<std::path::Path>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            reason: err.to_string(),
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type IdiomResult<T> = Result<T, IdiomError>;
