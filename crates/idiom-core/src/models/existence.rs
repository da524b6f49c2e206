use serde::{Deserialize, Serialize};

/// Outcome of a remote existence lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Existence {
    /// The reference service has an entry with this exact title.
    Exists,
    /// The reference service reported the entry missing.
    Missing,
    /// The lookup could not be completed (network error, timeout, bad payload).
    Unknown(String),
}

impl Existence {
    /// Fail-closed reading: only a confirmed entry counts.
    pub fn confirmed(&self) -> bool {
        matches!(self, Self::Exists)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

/// Which tier of the verification chain decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationTier {
    ReferenceSet,
    Dictionary,
    RemoteCache,
    Remote,
    /// No tier was consulted (empty input or every tier missed without a remote tier).
    None,
}

impl VerificationTier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReferenceSet => "reference_set",
            Self::Dictionary => "dictionary",
            Self::RemoteCache => "remote_cache",
            Self::Remote => "remote",
            Self::None => "none",
        }
    }
}

/// Detailed verification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub exists: bool,
    pub tier: VerificationTier,
}

impl Verdict {
    pub fn new(exists: bool, tier: VerificationTier) -> Self {
        Self { exists, tier }
    }
}
