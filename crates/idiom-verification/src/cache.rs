//! Memo of remote-tier results, keyed by exact idiom string.
//!
//! Owned by the chain rather than process-global, so each chain (and each
//! test) starts empty. The default policy never evicts.

use idiom_core::config::CachePolicy;
use moka::sync::Cache;

pub struct VerificationCache {
    cache: Cache<String, bool>,
}

impl VerificationCache {
    pub fn new(policy: &CachePolicy) -> Self {
        Self {
            cache: policy.build_cache(),
        }
    }

    pub fn unbounded() -> Self {
        Self::new(&CachePolicy::unbounded())
    }

    pub fn get(&self, idiom: &str) -> Option<bool> {
        self.cache.get(idiom)
    }

    pub fn insert(&self, idiom: &str, exists: bool) {
        self.cache.insert(idiom.to_string(), exists);
    }

    /// Number of memoized lookups, after pending evictions are applied.
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

impl Default for VerificationCache {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let cache = VerificationCache::unbounded();
        cache.insert("对症下药", true);
        cache.insert("完全不存在的成语", false);
        assert_eq!(cache.get("对症下药"), Some(true));
        assert_eq!(cache.get("完全不存在的成语"), Some(false));
        assert_eq!(cache.get("画蛇添足"), None);
    }

    #[test]
    fn unbounded_keeps_everything() {
        let cache = VerificationCache::unbounded();
        for i in 0..5_000 {
            cache.insert(&format!("成语{i}"), i % 2 == 0);
        }
        assert_eq!(cache.len(), 5_000);
        assert_eq!(cache.get("成语0"), Some(true));
    }

    #[test]
    fn bounded_policy_caps_size() {
        let cache = VerificationCache::new(&CachePolicy::bounded(10));
        for i in 0..1_000 {
            cache.insert(&format!("成语{i}"), true);
        }
        assert!(cache.len() <= 10);
    }
}
