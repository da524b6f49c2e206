//! Query/passage prefix convention.
//!
//! Asymmetric encoders (e5 family) expect `"query: "` on search text and
//! `"passage: "` on indexed text. The convention used when the corpus was
//! embedded is recorded in the corpus manifest and must be replayed exactly
//! at query time; a mismatch degrades ranking without any error.

use serde::{Deserialize, Serialize};

/// Text prefixes applied before embedding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrefixConvention {
    pub query_prefix: String,
    pub passage_prefix: String,
}

impl PrefixConvention {
    pub fn new(query_prefix: impl Into<String>, passage_prefix: impl Into<String>) -> Self {
        Self {
            query_prefix: query_prefix.into(),
            passage_prefix: passage_prefix.into(),
        }
    }

    /// The e5 convention: `"query: "` and `"passage: "`.
    pub fn e5() -> Self {
        Self::new("query: ", "passage: ")
    }

    /// No prefixes (symmetric encoders).
    pub fn none() -> Self {
        Self::new("", "")
    }

    pub fn apply_query(&self, text: &str) -> String {
        format!("{}{}", self.query_prefix, text)
    }

    pub fn apply_passage(&self, text: &str) -> String {
        format!("{}{}", self.passage_prefix, text)
    }
}

impl Default for PrefixConvention {
    fn default() -> Self {
        Self::e5()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn e5_prefixes() {
        let p = PrefixConvention::e5();
        assert_eq!(p.apply_query("rushing"), "query: rushing");
        assert_eq!(p.apply_passage("欲速则不达"), "passage: 欲速则不达");
    }

    #[test]
    fn none_is_identity() {
        let p = PrefixConvention::none();
        assert_eq!(p.apply_query("x"), "x");
        assert_eq!(p.apply_passage("y"), "y");
    }
}
