use serde::{Deserialize, Serialize};

use crate::constants::{SENTINEL_EXPLANATION, SENTINEL_IDIOM};

/// The renderable pair returned by `find_idiom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdiomAnswer {
    pub idiom: String,
    pub explanation: String,
}

impl IdiomAnswer {
    pub fn new(idiom: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            idiom: idiom.into(),
            explanation: explanation.into(),
        }
    }

    /// The fixed "no answer found" pair.
    pub fn sentinel() -> Self {
        Self::new(SENTINEL_IDIOM, SENTINEL_EXPLANATION)
    }

    /// Whether this is the "no answer found" pair rather than a real result.
    pub fn is_sentinel(&self) -> bool {
        self.idiom == SENTINEL_IDIOM
    }
}
