//! End-to-end tests for the embedding pipeline.
//!
//! Each test targets a failure mode that would break retrieval quietly:
//! - Provider returns the wrong dimensionality → mismatched similarity
//! - Provider returns NaN → poisoned ranking
//! - Provider drops vectors in a batch → records paired with wrong vectors
//! - Empty input → panic in normalization

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use idiom_core::config::EmbeddingConfig;
use idiom_core::errors::IdiomResult;
use idiom_core::traits::IEmbeddingProvider;
use idiom_embeddings::{EmbeddingEngine, HashedNgramProvider, PrefixConvention};

/// Provider returning a fixed vector, counting calls.
struct FixedProvider {
    vector: Vec<f32>,
    dims: usize,
    calls: Arc<AtomicUsize>,
    drop_last_in_batch: bool,
}

impl IEmbeddingProvider for FixedProvider {
    fn embed(&self, _text: &str) -> IdiomResult<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.vector.clone())
    }

    fn embed_batch(&self, texts: &[String]) -> IdiomResult<Vec<Vec<f32>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let n = if self.drop_last_in_batch {
            texts.len().saturating_sub(1)
        } else {
            texts.len()
        };
        Ok(vec![self.vector.clone(); n])
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    fn name(&self) -> &str {
        "fixed"
    }

    fn is_available(&self) -> bool {
        true
    }
}

fn fixed(vector: Vec<f32>, dims: usize) -> (EmbeddingEngine, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let provider = FixedProvider {
        vector,
        dims,
        calls: Arc::clone(&calls),
        drop_last_in_batch: false,
    };
    let engine =
        EmbeddingEngine::with_provider(Box::new(provider), PrefixConvention::e5(), 16, 8).unwrap();
    (engine, calls)
}

#[test]
fn wrong_dimensionality_is_rejected() {
    let (engine, _) = fixed(vec![1.0; 3], 4);
    let err = engine.encode("anything").unwrap_err();
    assert!(err.to_string().contains("dimension"), "{err}");
}

#[test]
fn non_finite_output_is_rejected() {
    let (engine, _) = fixed(vec![1.0, f32::NAN, 0.0, 0.0], 4);
    assert!(engine.encode("anything").is_err());
}

#[test]
fn short_batch_is_rejected() {
    let calls = Arc::new(AtomicUsize::new(0));
    let provider = FixedProvider {
        vector: vec![1.0, 0.0],
        dims: 2,
        calls,
        drop_last_in_batch: true,
    };
    let engine =
        EmbeddingEngine::with_provider(Box::new(provider), PrefixConvention::none(), 16, 8)
            .unwrap();
    let texts = vec!["a".to_string(), "b".to_string()];
    assert!(engine.encode_many(&texts).is_err());
}

#[test]
fn output_is_normalized() {
    let (engine, _) = fixed(vec![3.0, 4.0], 2);
    let v = engine.encode("anything").unwrap();
    assert!((v.as_slice()[0] - 0.6).abs() < 1e-6);
    assert!((v.as_slice()[1] - 0.8).abs() < 1e-6);
}

#[test]
fn repeated_query_hits_cache() {
    let (engine, calls) = fixed(vec![1.0, 0.0], 2);
    engine.encode("same").unwrap();
    engine.encode("same").unwrap();
    engine.encode("different").unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn empty_query_does_not_panic() {
    let engine = EmbeddingEngine::with_provider(
        Box::new(HashedNgramProvider::new(32)),
        PrefixConvention::none(),
        16,
        8,
    )
    .unwrap();
    let v = engine.encode("").unwrap();
    assert_eq!(v.dimensions(), 32);
}

#[test]
fn from_config_uses_hashed_provider() {
    let config = EmbeddingConfig {
        dimensions: 48,
        ..Default::default()
    };
    let engine = EmbeddingEngine::from_config(&config, PrefixConvention::e5()).unwrap();
    assert_eq!(engine.dimensions(), 48);
    assert_eq!(engine.model_name(), "hashed-ngram-v1");
}
