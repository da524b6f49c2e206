//! Download-on-first-use for artifact files: the corpus and the local
//! verification tiers.
//!
//! Files are streamed to a sibling temporary file and renamed into place
//! only after the optional blake3 digest matches, so a partial or corrupt
//! download never appears under the final name.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use idiom_core::errors::{CorpusError, IdiomError, IdiomResult};
use tracing::{info, warn};

const BUFFER_SIZE: usize = 64 * 1024;

/// Fetches missing artifact files over HTTP.
pub struct ArtifactDownloader {
    client: reqwest::blocking::Client,
}

impl ArtifactDownloader {
    pub fn new(timeout: Duration) -> IdiomResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CorpusError::DownloadFailed {
                url: String::new(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }

    /// Ensure `path` exists, downloading it from `url` if absent, then
    /// verify the digest when one is given.
    pub fn ensure(
        &self,
        path: &Path,
        url: Option<&str>,
        expected_blake3: Option<&str>,
    ) -> IdiomResult<()> {
        if !path.exists() {
            let url = url.ok_or_else(|| CorpusError::ArtifactMissing {
                path: path.display().to_string(),
            })?;
            self.download(url, path, expected_blake3)?;
            return Ok(());
        }
        if let Some(expected) = expected_blake3 {
            verify_checksum(path, expected)?;
        }
        Ok(())
    }

    /// Download `url` to `path` atomically.
    pub fn download(&self, url: &str, path: &Path, expected_blake3: Option<&str>) -> IdiomResult<()> {
        info!(url = %url, path = %path.display(), "downloading artifact");

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| IdiomError::io(parent, e))?;
        }

        let failed = |reason: String| CorpusError::DownloadFailed {
            url: url.to_string(),
            reason,
        };

        let mut response = self
            .client
            .get(url)
            .send()
            .map_err(|e| failed(e.to_string()))?;
        if !response.status().is_success() {
            return Err(failed(format!("HTTP {}", response.status())).into());
        }

        let tmp = temp_path(path);
        let mut file = fs::File::create(&tmp).map_err(|e| IdiomError::io(&tmp, e))?;
        let mut hasher = blake3::Hasher::new();
        let mut buffer = vec![0u8; BUFFER_SIZE];
        let mut downloaded: u64 = 0;

        loop {
            let n = match response.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) => {
                    remove_quietly(&tmp);
                    return Err(failed(e.to_string()).into());
                }
            };
            if let Err(e) = file.write_all(&buffer[..n]) {
                remove_quietly(&tmp);
                return Err(IdiomError::io(&tmp, e));
            }
            hasher.update(&buffer[..n]);
            downloaded += n as u64;
        }
        file.flush().map_err(|e| IdiomError::io(&tmp, e))?;
        drop(file);

        let actual = hasher.finalize().to_hex().to_string();
        match expected_blake3 {
            Some(expected) if !actual.eq_ignore_ascii_case(expected) => {
                remove_quietly(&tmp);
                return Err(CorpusError::ChecksumMismatch {
                    path: path.display().to_string(),
                    expected: expected.to_string(),
                    actual,
                }
                .into());
            }
            Some(_) => info!(path = %path.display(), "checksum verified"),
            None => warn!(
                path = %path.display(),
                blake3 = %actual,
                "no checksum in manifest for downloaded artifact"
            ),
        }

        fs::rename(&tmp, path).map_err(|e| IdiomError::io(path, e))?;
        info!(path = %path.display(), bytes = downloaded, "artifact downloaded");
        Ok(())
    }
}

/// Compute the blake3 digest of a file as lowercase hex.
pub fn file_blake3(path: &Path) -> IdiomResult<String> {
    let mut file = fs::File::open(path).map_err(|e| IdiomError::io(path, e))?;
    let mut hasher = blake3::Hasher::new();
    let mut buffer = vec![0u8; BUFFER_SIZE];
    loop {
        let n = file.read(&mut buffer).map_err(|e| IdiomError::io(path, e))?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }
    Ok(hasher.finalize().to_hex().to_string())
}

/// Fail with `ChecksumMismatch` unless the file's digest equals `expected`.
pub fn verify_checksum(path: &Path, expected: &str) -> IdiomResult<()> {
    let actual = file_blake3(path)?;
    if actual.eq_ignore_ascii_case(expected) {
        Ok(())
    } else {
        Err(CorpusError::ChecksumMismatch {
            path: path.display().to_string(),
            expected: expected.to_string(),
            actual,
        }
        .into())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".part");
    path.with_file_name(name)
}

fn remove_quietly(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        warn!(path = %path.display(), error = %e, "failed to remove partial download");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        fs::write(&path, b"[]").unwrap();
        let digest = blake3::hash(b"[]").to_hex().to_string();
        assert_eq!(file_blake3(&path).unwrap(), digest);
        assert!(verify_checksum(&path, &digest).is_ok());
        assert!(verify_checksum(&path, &digest.to_uppercase()).is_ok());
    }

    #[test]
    fn checksum_mismatch_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        fs::write(&path, b"[]").unwrap();
        let err = verify_checksum(&path, "00").unwrap_err();
        assert!(err.to_string().contains("checksum mismatch"));
    }

    #[test]
    fn missing_file_without_url_is_artifact_missing() {
        let dir = tempfile::tempdir().unwrap();
        let downloader = ArtifactDownloader::new(Duration::from_secs(1)).unwrap();
        let err = downloader
            .ensure(&dir.path().join("absent.npy"), None, None)
            .unwrap_err();
        assert!(err.to_string().contains("absent.npy"));
    }

    #[test]
    fn temp_path_is_sibling() {
        let p = temp_path(Path::new("/a/b/vectors.npy"));
        assert_eq!(p, PathBuf::from("/a/b/vectors.npy.part"));
    }
}
