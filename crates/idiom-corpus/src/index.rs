//! CorpusIndex: a single indexed collection of `(record, vector)` pairs.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use idiom_core::config::CorpusConfig;
use idiom_core::errors::{ConfigError, CorpusError, EmbeddingError, IdiomError, IdiomResult};
use idiom_core::{IdiomRecord, UnitVector};
use idiom_embeddings::{EmbeddingEngine, PrefixConvention};
use idiom_observability::events;
use tracing::{debug, warn};

use crate::download::{self, ArtifactDownloader};
use crate::manifest::CorpusManifest;
use crate::records;
use crate::vectors;

/// One corpus record with its embedding.
#[derive(Debug, Clone)]
pub struct CorpusEntry {
    pub record: IdiomRecord,
    pub vector: UnitVector,
}

/// Read-only corpus snapshot. Every vector has the same dimensionality and
/// unit norm, and idiom strings are unique.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    entries: Vec<CorpusEntry>,
    model: String,
    dimensions: usize,
    prefixes: PrefixConvention,
}

impl CorpusIndex {
    /// Assemble an index from raw rows, validating alignment, uniqueness and
    /// dimensionality. Rows are normalized here whatever their source.
    pub fn from_parts(
        records: Vec<IdiomRecord>,
        rows: Vec<Vec<f32>>,
        model: impl Into<String>,
        dimensions: usize,
        prefixes: PrefixConvention,
    ) -> IdiomResult<Self> {
        if records.len() != rows.len() {
            return Err(CorpusError::RowCountMismatch {
                records: records.len(),
                vectors: rows.len(),
            }
            .into());
        }

        let mut vectors = Vec::with_capacity(rows.len());
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != dimensions {
                return Err(CorpusError::DimensionMismatch {
                    index,
                    expected: dimensions,
                    actual: row.len(),
                }
                .into());
            }
            vectors.push(UnitVector::normalize(row).map_err(|e| match e {
                EmbeddingError::NonFinite { .. } => EmbeddingError::NonFinite { index },
                other => other,
            })?);
        }

        Self::from_vectors(records, vectors, model.into(), dimensions, prefixes)
    }

    fn from_vectors(
        records: Vec<IdiomRecord>,
        vectors: Vec<UnitVector>,
        model: String,
        dimensions: usize,
        prefixes: PrefixConvention,
    ) -> IdiomResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.idiom.as_str()) {
                return Err(CorpusError::DuplicateIdiom {
                    idiom: record.idiom.clone(),
                }
                .into());
            }
        }

        let mut entries = Vec::with_capacity(records.len());
        for (index, (record, vector)) in records.into_iter().zip(vectors).enumerate() {
            if vector.norm() == 0.0 {
                return Err(CorpusError::ZeroVector {
                    index,
                    idiom: record.idiom,
                }
                .into());
            }
            entries.push(CorpusEntry { record, vector });
        }

        events::corpus_loaded(entries.len(), dimensions, &model);
        Ok(Self {
            entries,
            model,
            dimensions,
            prefixes,
        })
    }

    /// Embed `records` with `engine` (passage prefix applied) and index them.
    pub fn build(records: Vec<IdiomRecord>, engine: &EmbeddingEngine) -> IdiomResult<Self> {
        let texts: Vec<String> = records.iter().map(IdiomRecord::passage_text).collect();
        let vectors = engine.encode_many(&texts)?;
        Self::from_vectors(
            records,
            vectors,
            engine.model_name().to_string(),
            engine.dimensions(),
            engine.prefixes().clone(),
        )
    }

    /// Load the artifact in `dir` described by `manifest`. The encoder must
    /// match the manifest's model and dimensionality.
    pub fn load(
        dir: &Path,
        manifest: &CorpusManifest,
        engine: &EmbeddingEngine,
        downloader: Option<&ArtifactDownloader>,
    ) -> IdiomResult<Self> {
        check_compatible(manifest, engine)?;

        let records_path = dir.join(&manifest.records_file);
        let embeddings_path = dir.join(&manifest.embeddings_file);

        fetch_or_verify(
            downloader,
            &records_path,
            manifest.records_url.as_deref(),
            manifest.records_blake3.as_deref(),
        )?;
        fetch_or_verify(
            downloader,
            &embeddings_path,
            manifest.embeddings_url.as_deref(),
            manifest.embeddings_blake3.as_deref(),
        )?;

        let records = records::load_records(&records_path)?;
        let matrix = vectors::read_embeddings(&embeddings_path)?;
        if matrix.rows() > 0 && matrix.dims() != manifest.dimensions {
            return Err(CorpusError::DimensionMismatch {
                index: 0,
                expected: manifest.dimensions,
                actual: matrix.dims(),
            }
            .into());
        }
        if !manifest.normalized {
            debug!(path = %embeddings_path.display(), "normalizing stored vectors");
        }

        Self::from_parts(
            records,
            matrix.into_rows(),
            manifest.model.clone(),
            manifest.dimensions,
            manifest.prefixes(),
        )
    }

    /// Persist this index as an artifact directory and return its manifest.
    /// Vectors are written in the flat binary format.
    pub fn save(&self, dir: &Path) -> IdiomResult<CorpusManifest> {
        fs::create_dir_all(dir).map_err(|e| IdiomError::io(dir, e))?;

        let records: Vec<&IdiomRecord> = self.entries.iter().map(|e| &e.record).collect();
        let records_json = serde_json::to_vec_pretty(&records)?;
        let rows: Vec<&[f32]> = self.entries.iter().map(|e| e.vector.as_slice()).collect();
        let embeddings = vectors::encode_flat(&rows);

        let manifest = CorpusManifest {
            model: self.model.clone(),
            dimensions: self.dimensions,
            query_prefix: self.prefixes.query_prefix.clone(),
            passage_prefix: self.prefixes.passage_prefix.clone(),
            normalized: true,
            records_file: "records.json".to_string(),
            embeddings_file: "embeddings.bin".to_string(),
            records_blake3: Some(blake3::hash(&records_json).to_hex().to_string()),
            embeddings_blake3: Some(blake3::hash(&embeddings).to_hex().to_string()),
            records_url: None,
            embeddings_url: None,
        };

        let records_path = dir.join(&manifest.records_file);
        fs::write(&records_path, records_json).map_err(|e| IdiomError::io(&records_path, e))?;
        let embeddings_path = dir.join(&manifest.embeddings_file);
        fs::write(&embeddings_path, embeddings).map_err(|e| IdiomError::io(&embeddings_path, e))?;
        manifest.write_to(&dir.join(idiom_core::config::defaults::DEFAULT_MANIFEST_FILE))?;
        Ok(manifest)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&CorpusEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CorpusEntry> {
        self.entries.iter()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn prefixes(&self) -> &PrefixConvention {
        &self.prefixes
    }
}

fn check_compatible(manifest: &CorpusManifest, engine: &EmbeddingEngine) -> IdiomResult<()> {
    if manifest.model != engine.model_name() {
        return Err(CorpusError::ModelMismatch {
            manifest: manifest.model.clone(),
            configured: engine.model_name().to_string(),
        }
        .into());
    }
    if manifest.dimensions != engine.dimensions() {
        return Err(EmbeddingError::DimensionMismatch {
            expected: manifest.dimensions,
            actual: engine.dimensions(),
        }
        .into());
    }
    if &manifest.prefixes() != engine.prefixes() {
        warn!(
            manifest_query = %manifest.query_prefix,
            engine_query = %engine.prefixes().query_prefix,
            "encoder prefix convention differs from corpus manifest"
        );
    }
    Ok(())
}

fn fetch_or_verify(
    downloader: Option<&ArtifactDownloader>,
    path: &Path,
    url: Option<&str>,
    expected: Option<&str>,
) -> IdiomResult<()> {
    match downloader {
        Some(d) => d.ensure(path, url, expected),
        None if !path.exists() => Err(CorpusError::ArtifactMissing {
            path: path.display().to_string(),
        }
        .into()),
        None => match expected {
            Some(digest) => download::verify_checksum(path, digest),
            None => Ok(()),
        },
    }
}

/// A located corpus artifact: its directory and parsed manifest.
///
/// Opened before the encoder is built, because the encoder's prefix
/// convention comes from the manifest.
#[derive(Debug, Clone)]
pub struct CorpusArtifact {
    dir: PathBuf,
    manifest: CorpusManifest,
    download: bool,
    download_timeout: Duration,
}

impl CorpusArtifact {
    /// Locate the manifest under `config.artifact_dir`, fetching it from
    /// `config.manifest_url` when absent and downloads are enabled.
    pub fn open(config: &CorpusConfig) -> IdiomResult<Self> {
        let dir = config
            .artifact_dir
            .as_deref()
            .map(PathBuf::from)
            .ok_or_else(|| ConfigError::MissingSetting {
                key: "corpus.artifact_dir".to_string(),
                reason: "no corpus artifact directory configured".to_string(),
            })?;
        let download_timeout = Duration::from_secs(config.download_timeout_secs);
        let manifest_path = dir.join(&config.manifest_file);

        if !manifest_path.exists() && config.download_on_first_use {
            if let Some(url) = config.manifest_url.as_deref() {
                ArtifactDownloader::new(download_timeout)?.download(url, &manifest_path, None)?;
            }
        }
        let manifest = CorpusManifest::from_file(&manifest_path)?;

        Ok(Self {
            dir,
            manifest,
            download: config.download_on_first_use,
            download_timeout,
        })
    }

    pub fn manifest(&self) -> &CorpusManifest {
        &self.manifest
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the index, downloading missing files when enabled.
    pub fn load_index(&self, engine: &EmbeddingEngine) -> IdiomResult<CorpusIndex> {
        let downloader = if self.download {
            Some(ArtifactDownloader::new(self.download_timeout)?)
        } else {
            None
        };
        CorpusIndex::load(&self.dir, &self.manifest, engine, downloader.as_ref())
    }
}
