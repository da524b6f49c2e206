//! Tier 2: the CC-CEDICT offline dictionary.
//!
//! Line format: `Traditional Simplified [pin1 yin1] /gloss 1/gloss 2/`.
//! Lines starting with `#` are comments. Both headword forms index the
//! entry.
//!
//! An idiom extract of CC-CEDICT ships with the crate; a full dictionary
//! file can be configured instead.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use idiom_core::errors::{IdiomResult, VerificationError};
use regex::Regex;
use tracing::{debug, info};

const BUNDLED: &str = include_str!("../../data/cedict_idioms.u8");

static ENTRY_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\S+)\s+(\S+)\s+\[([^\]]*)\]\s+/(.*)/\s*$").ok());

/// One dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub traditional: String,
    pub simplified: String,
    pub pinyin: String,
    pub glosses: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct OfflineDictionary {
    entries: HashMap<String, Vec<DictionaryEntry>>,
}

impl OfflineDictionary {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The CC-CEDICT idiom extract compiled into the crate.
    pub fn bundled() -> Self {
        Self::parse(BUNDLED)
    }

    pub fn from_file(path: &Path) -> IdiomResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| VerificationError::DictionaryLoadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let dict = Self::parse(&text);
        info!(path = %path.display(), headwords = dict.entries.len(), "dictionary loaded");
        Ok(dict)
    }

    /// Parse CC-CEDICT text. Lines that don't match the format are skipped.
    pub fn parse(text: &str) -> Self {
        let mut entries: HashMap<String, Vec<DictionaryEntry>> = HashMap::new();
        let Some(re) = ENTRY_RE.as_ref() else {
            return Self { entries };
        };

        let mut skipped = 0usize;
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some(caps) = re.captures(line) else {
                skipped += 1;
                continue;
            };
            let entry = DictionaryEntry {
                traditional: caps[1].to_string(),
                simplified: caps[2].to_string(),
                pinyin: caps[3].to_string(),
                glosses: caps[4]
                    .split('/')
                    .map(str::trim)
                    .filter(|g| !g.is_empty())
                    .map(String::from)
                    .collect(),
            };
            if entry.traditional != entry.simplified {
                entries
                    .entry(entry.traditional.clone())
                    .or_default()
                    .push(entry.clone());
            }
            entries.entry(entry.simplified.clone()).or_default().push(entry);
        }
        if skipped > 0 {
            debug!(skipped, "skipped malformed dictionary lines");
        }
        Self { entries }
    }

    /// All glosses for `word`, across its entries.
    pub fn definitions(&self, word: &str) -> Vec<&str> {
        self.entries
            .get(word)
            .map(|es| {
                es.iter()
                    .flat_map(|e| e.glosses.iter().map(String::as_str))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn entries(&self, word: &str) -> &[DictionaryEntry] {
        self.entries.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_definitions(&self, word: &str) -> bool {
        self.entries
            .get(word)
            .is_some_and(|es| es.iter().any(|e| !e.glosses.is_empty()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
