use serde::{Deserialize, Serialize};

use super::{defaults, CachePolicy};

/// Verification chain configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    /// JSON array of known-valid idioms (tier 1). The bundled list is
    /// used when unset.
    pub reference_set_path: Option<String>,
    /// Where to fetch the reference set from when the file is absent.
    pub reference_set_url: Option<String>,
    /// Expected blake3 digest of the reference set file.
    pub reference_set_blake3: Option<String>,
    /// CC-CEDICT dictionary file (tier 2). The bundled idiom extract is
    /// used when unset.
    pub dictionary_path: Option<String>,
    /// Where to fetch the dictionary from when the file is absent.
    pub dictionary_url: Option<String>,
    /// Expected blake3 digest of the dictionary file.
    pub dictionary_blake3: Option<String>,
    /// Timeout for a single tier file download.
    pub download_timeout_secs: u64,
    /// Whether tier 3 is consulted at all.
    pub remote_enabled: bool,
    /// MediaWiki API endpoint for tier 3.
    pub remote_endpoint: String,
    /// User-Agent sent with remote lookups.
    pub user_agent: String,
    /// Per-call timeout for remote lookups.
    pub remote_timeout_secs: u64,
    /// Eviction policy for memoized remote results.
    pub cache: CachePolicy,
    /// Memoize indeterminate remote outcomes as "does not exist".
    pub cache_unknown: bool,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            reference_set_path: None,
            reference_set_url: None,
            reference_set_blake3: None,
            dictionary_path: None,
            dictionary_url: None,
            dictionary_blake3: None,
            download_timeout_secs: defaults::DEFAULT_DOWNLOAD_TIMEOUT_SECS,
            remote_enabled: defaults::DEFAULT_REMOTE_ENABLED,
            remote_endpoint: defaults::DEFAULT_REMOTE_ENDPOINT.to_string(),
            user_agent: defaults::DEFAULT_USER_AGENT.to_string(),
            remote_timeout_secs: defaults::DEFAULT_REMOTE_TIMEOUT_SECS,
            cache: CachePolicy::unbounded(),
            cache_unknown: defaults::DEFAULT_CACHE_UNKNOWN,
        }
    }
}
