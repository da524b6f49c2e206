//! Tier 1: a fixed set of idioms known to be valid.
//!
//! A list of common idioms ships with the crate so the tier is never empty
//! unless a caller asks for it.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use idiom_core::errors::{IdiomResult, VerificationError};

/// One idiom per line.
const BUNDLED: &str = include_str!("../../data/reference_idioms.txt");

#[derive(Debug, Clone, Default)]
pub struct ReferenceSet {
    idioms: HashSet<String>,
}

impl ReferenceSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The reference list compiled into the crate.
    pub fn bundled() -> Self {
        BUNDLED.lines().collect()
    }

    /// Load a JSON array of idiom strings.
    pub fn from_file(path: &Path) -> IdiomResult<Self> {
        let failed = |reason: String| VerificationError::ReferenceSetLoadFailed {
            path: path.display().to_string(),
            reason,
        };
        let json = fs::read_to_string(path).map_err(|e| failed(e.to_string()))?;
        let idioms: Vec<String> = serde_json::from_str(&json).map_err(|e| failed(e.to_string()))?;
        Ok(idioms.into_iter().collect())
    }

    pub fn contains(&self, idiom: &str) -> bool {
        self.idioms.contains(idiom)
    }

    pub fn len(&self) -> usize {
        self.idioms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idioms.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ReferenceSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            idioms: iter
                .into_iter()
                .map(Into::into)
                .map(|s: String| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_membership() {
        let set: ReferenceSet = ["对症下药", "画蛇添足"].into_iter().collect();
        assert!(set.contains("对症下药"));
        assert!(!set.contains("对症下"));
        assert!(!set.contains("对症下药 "));
    }

    #[test]
    fn blank_entries_dropped() {
        let set: ReferenceSet = ["", "  ", "自相矛盾"].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn bundled_list_is_preloaded() {
        let set = ReferenceSet::bundled();
        assert!(set.len() > 200);
        assert!(set.contains("对症下药"));
        assert!(set.contains("画蛇添足"));
        assert!(!set.contains("完全不存在的成语"));
    }

    #[test]
    fn unreadable_file_is_error() {
        let err = ReferenceSet::from_file(Path::new("/nonexistent/chid.json")).unwrap_err();
        assert!(err.to_string().contains("chid.json"));
    }
}
