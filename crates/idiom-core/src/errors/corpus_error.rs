/// Corpus artifact errors. All of these are fatal at load time.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("corpus artifact missing: {path}")]
    ArtifactMissing { path: String },

    #[error("download of {url} failed: {reason}")]
    DownloadFailed { url: String, reason: String },

    #[error("checksum mismatch for {path}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    #[error("malformed corpus artifact {path}: {reason}")]
    Malformed { path: String, reason: String },

    #[error("duplicate idiom in corpus: {idiom}")]
    DuplicateIdiom { idiom: String },

    #[error("corpus has {records} records but {vectors} embedding rows")]
    RowCountMismatch { records: usize, vectors: usize },

    #[error("corpus vector {index} has dimension {actual}, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("corpus vector {index} ({idiom}) is all zeros")]
    ZeroVector { index: usize, idiom: String },

    #[error("corpus was embedded with {manifest}, but encoder is {configured}")]
    ModelMismatch {
        manifest: String,
        configured: String,
    },
}
