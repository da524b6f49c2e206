/// Verification subsystem errors. Only raised while building tiers;
/// lookups themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("failed to load reference set {path}: {reason}")]
    ReferenceSetLoadFailed { path: String, reason: String },

    #[error("failed to load dictionary {path}: {reason}")]
    DictionaryLoadFailed { path: String, reason: String },

    #[error("failed to build remote lookup client: {reason}")]
    ClientBuildFailed { reason: String },
}
