//! Records file parsing.
//!
//! Accepts a JSON array whose elements are either record objects or flat
//! `"<idiom>: <definition>"` strings. The two forms may be mixed.

use std::fs;
use std::path::Path;

use idiom_core::errors::{CorpusError, IdiomError, IdiomResult};
use idiom_core::IdiomRecord;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRecord {
    Flat(String),
    Full(IdiomRecord),
}

impl From<RawRecord> for IdiomRecord {
    fn from(raw: RawRecord) -> Self {
        match raw {
            RawRecord::Flat(entry) => IdiomRecord::from_flat(&entry),
            RawRecord::Full(record) => record,
        }
    }
}

/// Parse records from JSON text. `origin` names the source in errors.
pub fn parse_records(json: &str, origin: &str) -> IdiomResult<Vec<IdiomRecord>> {
    let raw: Vec<RawRecord> = serde_json::from_str(json).map_err(|e| CorpusError::Malformed {
        path: origin.to_string(),
        reason: e.to_string(),
    })?;
    let records: Vec<IdiomRecord> = raw.into_iter().map(IdiomRecord::from).collect();

    if let Some(pos) = records.iter().position(|r| r.idiom.is_empty()) {
        return Err(CorpusError::Malformed {
            path: origin.to_string(),
            reason: format!("record {pos} has an empty idiom"),
        }
        .into());
    }
    Ok(records)
}

pub fn load_records(path: &Path) -> IdiomResult<Vec<IdiomRecord>> {
    let json = fs::read_to_string(path).map_err(|e| IdiomError::io(path, e))?;
    parse_records(&json, &path.display().to_string())
}
