use serde::{Deserialize, Serialize};

use crate::constants::FLAT_RECORD_SEPARATOR;

/// One idiom in the corpus. Identity is the `idiom` string itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdiomRecord {
    /// The headword, usually four Han characters.
    pub idiom: String,
    /// English gloss.
    #[serde(default)]
    pub definition: String,
    /// Optional usage context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl IdiomRecord {
    pub fn new(idiom: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            idiom: idiom.into(),
            definition: definition.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Parse the flat `"<idiom>: <definition>"` form. Text without a
    /// separator is taken as a bare idiom.
    pub fn from_flat(entry: &str) -> Self {
        match entry.split_once(FLAT_RECORD_SEPARATOR) {
            Some((idiom, definition)) => Self::new(idiom.trim(), definition.trim()),
            None => Self::new(entry.trim(), ""),
        }
    }

    /// The text embedded for this record (before the passage prefix).
    pub fn passage_text(&self) -> String {
        let mut text = if self.definition.is_empty() {
            self.idiom.clone()
        } else {
            format!("{}{}{}", self.idiom, FLAT_RECORD_SEPARATOR, self.definition)
        };
        if let Some(ctx) = self.context.as_deref().filter(|c| !c.is_empty()) {
            text.push(' ');
            text.push_str(ctx);
        }
        text
    }
}
