//! # idiom-embeddings
//!
//! Turns query and corpus text into L2-normalized [`UnitVector`]s.
//!
//! ## Architecture
//!
//! ```text
//! EmbeddingEngine
//! ├── Provider (one model for both corpus and queries)
//! │   ├── HashedNgramProvider (default, deterministic, offline)
//! │   ├── OllamaProvider (local server)
//! │   ├── ApiProvider (OpenAI-compatible /v1/embeddings)
//! │   └── FastEmbedProvider (feature `fastembed`, local ONNX)
//! ├── PrefixConvention ("query: " / "passage: ", read from the corpus manifest)
//! └── Query cache (moka, keyed by blake3 of the prefixed text)
//! ```
//!
//! [`UnitVector`]: idiom_core::UnitVector

pub mod engine;
pub mod prefix;
pub mod providers;

pub use engine::EmbeddingEngine;
pub use prefix::PrefixConvention;
pub use providers::{create_provider, ApiProvider, HashedNgramProvider, OllamaProvider};

#[cfg(feature = "fastembed")]
pub use providers::FastEmbedProvider;
