//! # idiom-corpus
//!
//! The immutable corpus of idiom records and their precomputed vectors.
//!
//! An artifact directory holds a manifest, a records file and an embeddings
//! file. The manifest pins the embedding model, dimensionality and the
//! query/passage prefix convention the vectors were produced with, so the
//! encoder can be configured to match before any query is embedded.
//!
//! Loading is all-or-nothing: duplicate idioms, a row-count or dimension
//! mismatch, a model mismatch or a bad checksum are fatal.

pub mod download;
pub mod index;
pub mod manifest;
pub mod records;
pub mod vectors;

pub use download::ArtifactDownloader;
pub use index::{CorpusArtifact, CorpusEntry, CorpusIndex};
pub use manifest::CorpusManifest;
