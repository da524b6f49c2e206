//! Corpus artifact manifest.

use std::fs;
use std::path::Path;

use idiom_core::errors::{CorpusError, IdiomError, IdiomResult};
use idiom_embeddings::PrefixConvention;
use serde::{Deserialize, Serialize};

/// Describes how a corpus artifact was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusManifest {
    /// Embedding model identifier the vectors were produced with.
    pub model: String,
    pub dimensions: usize,
    #[serde(default)]
    pub query_prefix: String,
    #[serde(default)]
    pub passage_prefix: String,
    /// Whether the stored vectors are already L2-normalized.
    #[serde(default)]
    pub normalized: bool,
    pub records_file: String,
    pub embeddings_file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records_blake3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embeddings_blake3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embeddings_url: Option<String>,
}

impl CorpusManifest {
    pub fn from_json(json: &str) -> IdiomResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> IdiomResult<Self> {
        if !path.exists() {
            return Err(CorpusError::ArtifactMissing {
                path: path.display().to_string(),
            }
            .into());
        }
        let json = fs::read_to_string(path).map_err(|e| IdiomError::io(path, e))?;
        serde_json::from_str(&json).map_err(|e| {
            CorpusError::Malformed {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    pub fn write_to(&self, path: &Path) -> IdiomResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| IdiomError::io(path, e))
    }

    /// The prefix convention the corpus passages were embedded with.
    pub fn prefixes(&self) -> PrefixConvention {
        PrefixConvention::new(self.query_prefix.clone(), self.passage_prefix.clone())
    }
}
