//! Test fixture loader for the idiom finder's golden datasets.
//!
//! Fixtures live under `test-fixtures/golden/` at the workspace root and
//! are addressed by path relative to `test-fixtures/`.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Load a fixture file as text.
pub fn load_fixture_text(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// The golden corpus as flat `"<idiom>: <definition>"` strings.
pub fn golden_corpus() -> Vec<String> {
    load_fixture("golden/corpus/records.json")
}

/// The golden reference set of known-valid idioms.
pub fn golden_reference_set() -> Vec<String> {
    load_fixture("golden/verification/reference_set.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn all_golden_files_exist() {
        let files = [
            "golden/corpus/records.json",
            "golden/corpus/scenarios.json",
            "golden/verification/reference_set.json",
            "golden/verification/cedict_sample.u8",
            "golden/generation/oracle_responses.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn golden_corpus_has_unique_idioms() {
        let corpus = golden_corpus();
        let mut idioms: Vec<&str> = corpus
            .iter()
            .map(|e| e.split_once(": ").map_or(e.as_str(), |(i, _)| i))
            .collect();
        let total = idioms.len();
        idioms.sort_unstable();
        idioms.dedup();
        assert_eq!(idioms.len(), total);
        assert_eq!(total, 16);
    }

    #[test]
    fn reference_set_is_a_subset_of_corpus() {
        let corpus = golden_corpus();
        for idiom in golden_reference_set() {
            assert!(
                corpus.iter().any(|e| e.starts_with(&idiom)),
                "{idiom} missing from corpus"
            );
        }
    }

    #[test]
    fn scenarios_parse() {
        let v = load_fixture_value("golden/corpus/scenarios.json");
        assert_eq!(v["scenarios"].as_array().unwrap().len(), 4);
    }
}
