use std::hash::Hash;
use std::time::Duration;

use moka::sync::Cache;
use serde::{Deserialize, Serialize};

/// Eviction policy for the process-lifetime memo caches.
///
/// Both fields unset means the cache grows without bound and entries never
/// expire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CachePolicy {
    /// Maximum number of entries kept.
    pub max_entries: Option<u64>,
    /// Entry lifetime in seconds.
    pub time_to_live_secs: Option<u64>,
}

impl CachePolicy {
    /// No bound and no expiry.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Bounded to `max_entries`, no expiry.
    pub fn bounded(max_entries: u64) -> Self {
        Self {
            max_entries: Some(max_entries),
            time_to_live_secs: None,
        }
    }

    pub fn time_to_live(&self) -> Option<Duration> {
        self.time_to_live_secs.map(Duration::from_secs)
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_entries.is_none() && self.time_to_live_secs.is_none()
    }

    /// Build a moka cache honoring this policy.
    pub fn build_cache<K, V>(&self) -> Cache<K, V>
    where
        K: Hash + Eq + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        let mut builder = Cache::builder();
        if let Some(max) = self.max_entries {
            builder = builder.max_capacity(max);
        }
        if let Some(ttl) = self.time_to_live() {
            builder = builder.time_to_live(ttl);
        }
        builder.build()
    }
}
