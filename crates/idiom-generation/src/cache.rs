//! Memo of accepted answers, keyed by the exact situation text.
//!
//! Keys are not normalized: case and whitespace differences are distinct
//! situations. Only verified answers are ever inserted.

use idiom_core::config::CachePolicy;
use idiom_core::IdiomAnswer;
use moka::sync::Cache;

pub struct ResultCache {
    cache: Cache<String, IdiomAnswer>,
}

impl ResultCache {
    pub fn new(policy: &CachePolicy) -> Self {
        Self {
            cache: policy.build_cache(),
        }
    }

    pub fn unbounded() -> Self {
        Self::new(&CachePolicy::unbounded())
    }

    pub fn get(&self, situation: &str) -> Option<IdiomAnswer> {
        self.cache.get(situation)
    }

    pub fn insert(&self, situation: &str, answer: IdiomAnswer) {
        self.cache.insert(situation.to_string(), answer);
    }

    pub fn contains(&self, situation: &str) -> bool {
        self.cache.contains_key(situation)
    }

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

impl Default for ResultCache {
    fn default() -> Self {
        Self::unbounded()
    }
}
