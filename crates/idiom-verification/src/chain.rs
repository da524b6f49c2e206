//! VerificationChain: reference set → dictionary → remote lookup.

use std::path::Path;
use std::time::Duration;

use idiom_core::config::VerificationConfig;
use idiom_core::errors::{ConfigError, IdiomResult};
use idiom_core::models::{Existence, Verdict, VerificationTier};
use idiom_core::traits::IExistenceOracle;
use idiom_corpus::ArtifactDownloader;
use idiom_observability::events;
use tracing::{debug, info};

use crate::cache::VerificationCache;
use crate::tiers::{OfflineDictionary, ReferenceSet, WiktionaryClient};

/// Tiered existence check with short-circuit on the first confirmation.
///
/// Only the remote tier is memoized; the local tiers are in-memory lookups.
pub struct VerificationChain {
    reference_set: ReferenceSet,
    dictionary: OfflineDictionary,
    remote: Option<Box<dyn IExistenceOracle>>,
    cache: VerificationCache,
    cache_unknown: bool,
}

impl VerificationChain {
    pub fn new(
        reference_set: ReferenceSet,
        dictionary: OfflineDictionary,
        remote: Option<Box<dyn IExistenceOracle>>,
        cache: VerificationCache,
    ) -> Self {
        Self {
            reference_set,
            dictionary,
            remote,
            cache,
            cache_unknown: true,
        }
    }

    /// Whether indeterminate remote outcomes are memoized as "does not
    /// exist". When off, the next call retries the lookup.
    pub fn with_cache_unknown(mut self, cache_unknown: bool) -> Self {
        self.cache_unknown = cache_unknown;
        self
    }

    /// Build all tiers from configuration.
    ///
    /// An unset reference set or dictionary path selects the bundled
    /// resource. A configured file is fetched from its URL when absent and
    /// checked against its digest; one that is still missing or unreadable
    /// is an error.
    pub fn from_config(config: &VerificationConfig) -> IdiomResult<Self> {
        let timeout = Duration::from_secs(config.download_timeout_secs);
        let reference_set = match config.reference_set_path.as_deref() {
            Some(path) => {
                let path = Path::new(path);
                fetch_tier_file(
                    path,
                    config.reference_set_url.as_deref(),
                    config.reference_set_blake3.as_deref(),
                    timeout,
                )?;
                ReferenceSet::from_file(path)?
            }
            None => {
                reject_orphan_url("verification.reference_set", &config.reference_set_url)?;
                ReferenceSet::bundled()
            }
        };
        let dictionary = match config.dictionary_path.as_deref() {
            Some(path) => {
                let path = Path::new(path);
                fetch_tier_file(
                    path,
                    config.dictionary_url.as_deref(),
                    config.dictionary_blake3.as_deref(),
                    timeout,
                )?;
                OfflineDictionary::from_file(path)?
            }
            None => {
                reject_orphan_url("verification.dictionary", &config.dictionary_url)?;
                OfflineDictionary::bundled()
            }
        };
        let remote: Option<Box<dyn IExistenceOracle>> = if config.remote_enabled {
            Some(Box::new(WiktionaryClient::new(
                config.remote_endpoint.clone(),
                &config.user_agent,
                Duration::from_secs(config.remote_timeout_secs),
            )?))
        } else {
            None
        };

        info!(
            reference_set = reference_set.len(),
            reference_set_source = config.reference_set_path.as_deref().unwrap_or("bundled"),
            dictionary = dictionary.len(),
            dictionary_source = config.dictionary_path.as_deref().unwrap_or("bundled"),
            remote = config.remote_enabled,
            "verification chain ready"
        );

        Ok(Self::new(
            reference_set,
            dictionary,
            remote,
            VerificationCache::new(&config.cache),
        )
        .with_cache_unknown(config.cache_unknown))
    }

    /// `true` only if some tier confirms the idiom exists.
    pub fn verify(&self, idiom: &str) -> bool {
        self.verify_detailed(idiom).exists
    }

    /// Verify and report which tier decided.
    pub fn verify_detailed(&self, idiom: &str) -> Verdict {
        let verdict = self.decide(idiom);
        events::idiom_verified(idiom, verdict.exists, verdict.tier.as_str());
        verdict
    }

    fn decide(&self, idiom: &str) -> Verdict {
        if idiom.trim().is_empty() {
            return Verdict::new(false, VerificationTier::None);
        }
        if self.reference_set.contains(idiom) {
            return Verdict::new(true, VerificationTier::ReferenceSet);
        }
        if self.dictionary.has_definitions(idiom) {
            return Verdict::new(true, VerificationTier::Dictionary);
        }

        let Some(remote) = &self.remote else {
            return Verdict::new(false, VerificationTier::None);
        };
        if let Some(exists) = self.cache.get(idiom) {
            debug!(idiom = %idiom, exists, "remote result cache hit");
            return Verdict::new(exists, VerificationTier::RemoteCache);
        }

        let exists = match remote.lookup(idiom) {
            Existence::Exists => {
                self.cache.insert(idiom, true);
                true
            }
            Existence::Missing => {
                self.cache.insert(idiom, false);
                false
            }
            Existence::Unknown(reason) => {
                events::remote_lookup_failed(idiom, &reason);
                if self.cache_unknown {
                    self.cache.insert(idiom, false);
                }
                false
            }
        };
        Verdict::new(exists, VerificationTier::Remote)
    }

    pub fn cache(&self) -> &VerificationCache {
        &self.cache
    }

    pub fn reference_set(&self) -> &ReferenceSet {
        &self.reference_set
    }

    pub fn dictionary(&self) -> &OfflineDictionary {
        &self.dictionary
    }
}

/// Download a missing tier file and verify its digest. Without a URL or
/// digest the file is read as-is.
fn fetch_tier_file(
    path: &Path,
    url: Option<&str>,
    expected_blake3: Option<&str>,
    timeout: Duration,
) -> IdiomResult<()> {
    if url.is_none() && expected_blake3.is_none() {
        return Ok(());
    }
    ArtifactDownloader::new(timeout)?.ensure(path, url, expected_blake3)
}

/// A URL needs a local path to download into.
fn reject_orphan_url(key: &str, url: &Option<String>) -> IdiomResult<()> {
    match url {
        Some(url) => Err(ConfigError::MissingSetting {
            key: format!("{key}_path"),
            reason: format!("{key}_url {url} has nowhere to download to"),
        }
        .into()),
        None => Ok(()),
    }
}
