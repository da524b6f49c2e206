use serde::{Deserialize, Serialize};

use super::defaults;

/// Corpus artifact configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Directory holding the manifest, records and embeddings files.
    /// `None` disables the retrieval strategy.
    pub artifact_dir: Option<String>,
    /// Manifest file name inside `artifact_dir`.
    pub manifest_file: String,
    /// Where to fetch the manifest from when it is absent locally.
    pub manifest_url: Option<String>,
    /// Download missing artifact files from their manifest URLs.
    pub download_on_first_use: bool,
    /// Timeout for a single artifact download.
    pub download_timeout_secs: u64,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            artifact_dir: None,
            manifest_file: defaults::DEFAULT_MANIFEST_FILE.to_string(),
            manifest_url: None,
            download_on_first_use: defaults::DEFAULT_DOWNLOAD_ON_FIRST_USE,
            download_timeout_secs: defaults::DEFAULT_DOWNLOAD_TIMEOUT_SECS,
        }
    }
}
