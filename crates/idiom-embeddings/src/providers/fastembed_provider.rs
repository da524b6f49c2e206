//! Local ONNX sentence-embedding provider via fastembed.
//!
//! Default model is `multilingual-e5-large` (1024 dims), an asymmetric
//! encoder that expects the e5 query/passage prefixes.

use std::sync::Mutex;

use fastembed::{EmbeddingModel, TextEmbedding, TextInitOptions};
use idiom_core::errors::{EmbeddingError, IdiomResult};
use idiom_core::traits::IEmbeddingProvider;
use tracing::debug;

/// fastembed-backed provider.
pub struct FastEmbedProvider {
    model: Mutex<TextEmbedding>,
    model_name: String,
    dimensions: usize,
}

impl FastEmbedProvider {
    /// Load a supported model by name, downloading weights on first use.
    pub fn load(model_name: &str) -> IdiomResult<Self> {
        let (model, dimensions) = match model_name {
            "multilingual-e5-large" => (EmbeddingModel::MultilingualE5Large, 1024),
            "multilingual-e5-base" => (EmbeddingModel::MultilingualE5Base, 768),
            "multilingual-e5-small" => (EmbeddingModel::MultilingualE5Small, 384),
            other => {
                return Err(EmbeddingError::ModelLoadFailed {
                    model: other.to_string(),
                    reason: "unsupported fastembed model".to_string(),
                }
                .into())
            }
        };

        let embedding =
            TextEmbedding::try_new(TextInitOptions::new(model).with_show_download_progress(false))
                .map_err(|e| EmbeddingError::ModelLoadFailed {
                    model: model_name.to_string(),
                    reason: e.to_string(),
                })?;

        debug!(model = %model_name, dims = dimensions, "fastembed model loaded");

        Ok(Self {
            model: Mutex::new(embedding),
            model_name: model_name.to_string(),
            dimensions,
        })
    }

    fn infer(&self, texts: &[String]) -> IdiomResult<Vec<Vec<f32>>> {
        let mut model = self.model.lock().map_err(|e| EmbeddingError::InferenceFailed {
            reason: format!("model lock poisoned: {e}"),
        })?;
        model
            .embed(texts.to_vec(), None)
            .map_err(|e| {
                EmbeddingError::InferenceFailed {
                    reason: e.to_string(),
                }
                .into()
            })
    }
}

impl IEmbeddingProvider for FastEmbedProvider {
    fn embed(&self, text: &str) -> IdiomResult<Vec<f32>> {
        self.infer(&[text.to_string()])?
            .into_iter()
            .next()
            .ok_or_else(|| {
                EmbeddingError::InferenceFailed {
                    reason: "no embedding returned".to_string(),
                }
                .into()
            })
    }

    fn embed_batch(&self, texts: &[String]) -> IdiomResult<Vec<Vec<f32>>> {
        self.infer(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model_name
    }

    fn is_available(&self) -> bool {
        true
    }
}
